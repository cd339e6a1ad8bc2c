//! # Error Types
//!
//! Domain-specific error types for lager-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  lager-core errors (this file)                                         │
//! │  ├── CoreError        - Catalog and order-sheet lookups                │
//! │  └── ValidationError  - Catalog data validation failures               │
//! │                                                                         │
//! │  NOT an error: malformed text in a live form field.                    │
//! │  Field text coerces to 0 (see `input`) and never reaches this module.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Conventions
//! - `thiserror` derives the `Error` impls; messages live in the variants
//! - Every variant carries the grihed id or field name it is about
//! - The line calculation itself is infallible; only lookups and catalog
//!   writes can fail

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These cover the two things that can actually go wrong in this crate:
/// asking for a crate or order line that does not exist, and feeding invalid
/// data into the catalog.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Beverage crate cannot be found in the catalog.
    ///
    /// Raised when a grihed id is requested that was never inserted, or a
    /// price quote references a crate the catalog does not carry.
    #[error("Beverage crate not found: {0}")]
    CrateNotFound(String),

    /// The order sheet has no line for the given grihed id.
    ///
    /// Raised when a cell edit names a row the sheet does not carry.
    #[error("No order line for grihed id: {0}")]
    LineNotFound(String),

    /// A catalog or sheet write was refused, wrapping the reason.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Catalog data validation errors.
///
/// Produced when crate master data or a stocktake write does not meet the
/// catalog rules. Live form fields never produce these; they coerce to 0
/// instead (see the `input` module).
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required text field is missing or blank.
    #[error("{field} must not be empty")]
    Required { field: String },

    /// A text field exceeds its length limit.
    #[error("{field} is longer than {max} characters")]
    TooLong { field: String, max: usize },

    /// A numeric field lies outside its allowed range.
    #[error("{field} must lie between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// A count that only makes sense above zero.
    #[error("{field} must be greater than zero")]
    MustBePositive { field: String },

    /// A field whose content does not look like that field at all.
    #[error("{field} is not valid: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// A value that must be unique but already exists.
    #[error("duplicate {field}: {value}")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Shorthand for results that fail with [`CoreError`].
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_error_messages() {
        let err = CoreError::CrateNotFound("B1278".to_string());
        assert_eq!(err.to_string(), "Beverage crate not found: B1278");

        let err = CoreError::LineNotFound("E3446".to_string());
        assert_eq!(err.to_string(), "No order line for grihed id: E3446");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "grihed_id".to_string(),
        };
        assert_eq!(err.to_string(), "grihed_id must not be empty");

        let err = ValidationError::Duplicate {
            field: "grihed_id".to_string(),
            value: "B1278".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate grihed_id: B1278");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "number_of_bottles".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(
            core_err.to_string(),
            "validation failed: number_of_bottles must be greater than zero"
        );
    }
}
