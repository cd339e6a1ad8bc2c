//! # Validation Module
//!
//! Input validation for catalog maintenance.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Two Kinds of Input                                 │
//! │                                                                         │
//! │  Live order form (input module)                                         │
//! │  ├── Recomputes on every keystroke                                      │
//! │  └── NEVER errors: blank/garbage text coerces to 0                      │
//! │                                                                         │
//! │  Catalog maintenance (THIS MODULE)                                      │
//! │  ├── Runs when a crate is added or edited in the catalog               │
//! │  ├── Strict: a crate with no article number or a negative price        │
//! │  │   must not enter the catalog at all                                 │
//! │  └── Returns ValidationError for the maintenance UI to display         │
//! │                                                                         │
//! │  The form tolerates bad keystrokes; the catalog refuses bad data.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use lager_core::validation::{validate_grihed_id, validate_price_cents};
//!
//! // Validate before inserting into the catalog
//! validate_grihed_id("B1278").unwrap();
//! validate_price_cents(970).unwrap();
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Shared Checks
// =============================================================================

/// Trims the text and refuses blank fields, handing back the trimmed rest.
fn non_empty<'a>(field: &str, text: &'a str) -> ValidationResult<&'a str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(trimmed)
}

/// Refuses counts and cent amounts below zero.
fn non_negative(field: &str, value: i64) -> ValidationResult<()> {
    if value < 0 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }
    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a grihed article number.
///
/// ## Rules
/// - Not blank, at most 50 characters
/// - ASCII letters and digits only, with `-` and `_` allowed for the odd
///   list entry that carries them
///
/// ## Example
/// ```rust
/// use lager_core::validation::validate_grihed_id;
///
/// assert!(validate_grihed_id("B1278").is_ok());
/// assert!(validate_grihed_id("").is_err());
/// assert!(validate_grihed_id("A".repeat(100).as_str()).is_err());
/// ```
pub fn validate_grihed_id(grihed_id: &str) -> ValidationResult<()> {
    let grihed_id = non_empty("grihed_id", grihed_id)?;

    if grihed_id.len() > 50 {
        return Err(ValidationError::TooLong {
            field: "grihed_id".to_string(),
            max: 50,
        });
    }

    let plain_ascii = grihed_id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !plain_ascii {
        return Err(ValidationError::InvalidFormat {
            field: "grihed_id".to_string(),
            reason: "grihed article numbers use ASCII letters, digits, '-' and '_'".to_string(),
        });
    }

    Ok(())
}

/// Validates a crate display name.
///
/// ## Rules
/// - Not blank, at most 200 characters
///
/// ## Example
/// ```rust
/// use lager_core::validation::validate_crate_name;
///
/// assert!(validate_crate_name("Pilsator 20x0,5l").is_ok());
/// assert!(validate_crate_name("").is_err());
/// ```
pub fn validate_crate_name(name: &str) -> ValidationResult<()> {
    let name = non_empty("name", name)?;

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a net price in cents.
///
/// ## Rules
/// - Must not be negative
/// - Zero is allowed (donated or written-off stock)
///
/// ## Example
/// ```rust
/// use lager_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(970).is_ok());   // 9,70€
/// assert!(validate_price_cents(0).is_ok());     // donated crate
/// assert!(validate_price_cents(-100).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    non_negative("price", cents)
}

/// Validates a deposit in cents.
///
/// ## Rules
/// - Must not be negative
/// - Zero is allowed (one-way packaging carries no deposit)
pub fn validate_deposit_cents(cents: i64) -> ValidationResult<()> {
    non_negative("deposit", cents)
}

/// Validates the counter selling price of one bottle, in cents.
///
/// ## Rules
/// - Must not be negative
/// - Zero is allowed (articles kept for internal use are never sold)
pub fn validate_selling_price_cents(cents: i64) -> ValidationResult<()> {
    non_negative("selling_price", cents)
}

/// Validates a stock level for a catalog write.
///
/// ## Note
/// This guards catalog maintenance only. Stock text typed into the live
/// order form goes through the input module instead, which clamps instead
/// of erroring.
pub fn validate_stock_level(field: &str, count: i64) -> ValidationResult<()> {
    non_negative(field, count)
}

/// Validates the number of bottles in a crate.
///
/// ## Rules
/// - Must be greater than zero
/// - A crate with zero bottles is a data entry mistake, not a product
pub fn validate_bottle_count(count: i64) -> ValidationResult<()> {
    if count <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "number_of_bottles".to_string(),
        });
    }

    Ok(())
}

/// Validates a bottle volume in milliliters.
///
/// ## Rules
/// - Must not be negative
/// - Zero is allowed (hygiene articles have no bottle volume)
pub fn validate_bottle_volume_ml(ml: i64) -> ValidationResult<()> {
    non_negative("ml_per_bottle", ml)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_grihed_id() {
        // Valid article numbers
        assert!(validate_grihed_id("B1278").is_ok());
        assert!(validate_grihed_id("GH-042").is_ok());
        assert!(validate_grihed_id("artikel_7").is_ok());

        // Invalid article numbers
        assert!(validate_grihed_id("").is_err());
        assert!(validate_grihed_id("   ").is_err());
        assert!(validate_grihed_id("has space").is_err());
        assert!(validate_grihed_id("BÄR1").is_err()); // umlauts are not ASCII
        assert!(validate_grihed_id(&"A".repeat(100)).is_err());
    }

    #[test]
    fn test_validate_grihed_id_reports_the_right_variant() {
        assert!(matches!(
            validate_grihed_id(" "),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_grihed_id(&"A".repeat(51)),
            Err(ValidationError::TooLong { max: 50, .. })
        ));
        assert!(matches!(
            validate_grihed_id("B 1278"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_crate_name() {
        assert!(validate_crate_name("Pilsator 20x0,5l").is_ok());
        assert!(validate_crate_name("").is_err());
        assert!(validate_crate_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(970).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_deposit_cents() {
        assert!(validate_deposit_cents(0).is_ok());
        assert!(validate_deposit_cents(450).is_ok());
        assert!(validate_deposit_cents(-1).is_err());
    }

    #[test]
    fn test_validate_selling_price_cents() {
        assert!(validate_selling_price_cents(100).is_ok());
        assert!(validate_selling_price_cents(0).is_ok());
        assert!(validate_selling_price_cents(-50).is_err());
    }

    #[test]
    fn test_validate_stock_level() {
        assert!(validate_stock_level("current_stock", 0).is_ok());
        assert!(validate_stock_level("current_stock", 30).is_ok());
        assert!(validate_stock_level("target_stock", -5).is_err());
    }

    #[test]
    fn test_validate_bottle_count() {
        assert!(validate_bottle_count(20).is_ok());
        assert!(validate_bottle_count(6).is_ok());
        assert!(validate_bottle_count(0).is_err());
        assert!(validate_bottle_count(-1).is_err());
    }

    #[test]
    fn test_validate_bottle_volume_ml() {
        assert!(validate_bottle_volume_ml(500).is_ok());
        assert!(validate_bottle_volume_ml(0).is_ok()); // soap has no volume
        assert!(validate_bottle_volume_ml(-500).is_err());
    }
}
