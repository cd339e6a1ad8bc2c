//! # lager-core: Pure Business Logic for the Beverage Order System
//!
//! Everything the ordering form computes lives in this crate, as plain
//! functions over plain data. Nothing in here touches the outside world.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Lager System Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Order Form (one page per supplier)               │   │
//! │  │    stock cell ──► extra cell ──► quantity cell ──► totals row   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ cell edits (raw text)                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                     Application Glue                             │   │
//! │  │    load catalog, route edits, render prices, export sheets      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ lager-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   order   │  │  catalog  │  │   │
//! │  │   │ Beverage- │  │   Money   │  │ OrderSheet│  │  Catalog  │  │   │
//! │  │   │   Crate   │  │ parse_    │  │ OrderLine │  │ PriceBook │  │   │
//! │  │   │ Inventory │  │  german   │  │ calculate │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐                                 │   │
//! │  │   │   input   │  │ validation│                                 │   │
//! │  │   │ coerce-to-│  │  catalog  │                                 │   │
//! │  │   │   zero    │  │   rules   │                                 │   │
//! │  │   └───────────┘  └───────────┘                                 │   │
//! │  │                                                                 │   │
//! │  │   NO DATABASE • NO NETWORK • NO CLOCK • PURE FUNCTIONS         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (BeverageCrate, CrateInventory, Supplier, etc.)
//! - [`money`] - Euro amounts in whole cents, plus German price text parsing
//! - [`input`] - Coercion of raw form text into counts (never fails)
//! - [`order`] - Order sheets, order lines, and the line calculation
//! - [`catalog`] - The beverage catalog and its price history
//! - [`error`] - Lookup and validation errors
//! - [`validation`] - Catalog maintenance validation
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: same cells in, same cells out, every time
//! 2. **No I/O**: database, network, clock and files stay outside this crate
//! 3. **Integer money**: every price is whole euro cents in an `i64`
//! 4. **Forms never fail**: text typed into the order form coerces, catalog
//!    maintenance validates
//!
//! ## Example Usage
//!
//! ```rust
//! use lager_core::money::Money;
//! use lager_core::order::{calculate_line, LineInputs, LineParams};
//!
//! // 5 crates in the cellar, 20 wanted, 3,50€ per crate
//! let inputs = LineInputs::from_fields("5", "", "");
//! let params = LineParams::new(Money::from_cents(350), 20);
//!
//! let outputs = calculate_line(inputs.mode(), &inputs, &params);
//!
//! // Order the missing 15 crates for 52,50€
//! assert_eq!(outputs.order_quantity, 15);
//! assert_eq!(format!("{}", outputs.order_price), "52,50€");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod input;
pub mod money;
pub mod order;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use lager_core::Money` instead of
// `use lager_core::money::Money`

pub use catalog::{Catalog, PriceBook};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::{
    calculate_line, LineInputs, LineOutputs, LineParams, OrderLine, OrderSheet, QuantityMode,
    SheetTotals,
};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Bottles in a standard beverage crate
///
/// ## Why a constant?
/// Nearly the whole catalog is 20 × 0,5l returnable crates. New catalog
/// entries start from this and the exceptions (6 × 1,5l PET, coffee boxes)
/// get adjusted by hand afterwards.
pub const STANDARD_BOTTLES_PER_CRATE: i64 = 20;

/// Bottle volume of a standard crate, in milliliters
pub const STANDARD_BOTTLE_ML: i64 = 500;

/// Deposit on a standard returnable glass crate, in cents (4,50€)
///
/// ## Business Reason
/// The common pool crate: 20 glass bottles at 15 cents plus 1,50€ for the
/// crate itself, invoiced by the supplier as a flat 4,50€. Per-crate
/// exceptions override this in the catalog entry.
pub const DEFAULT_DEPOSIT_CENTS: i64 = 450;

/// Highest count a single order form cell can hold
///
/// ## Business Reason
/// The cellar holds a few hundred crates; a count past this ceiling is a
/// typo or pasted garbage, never a stocktake. Counts cap here instead of
/// erroring (the form never fails), which also keeps every price the sheet
/// computes inside exact i64 cent arithmetic.
pub const MAX_CRATE_COUNT: i64 = 100_000;
