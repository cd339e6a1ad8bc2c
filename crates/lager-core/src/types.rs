//! # Domain Types
//!
//! Core domain types for the beverage ordering system.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  BeverageCrate  │   │ CrateInventory  │   │   CratePrice    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  grihed_id      │   │  current_stock  │   │  price_cents    │       │
//! │  │  name           │   │  target_stock   │   │  deposit_cents  │       │
//! │  │  price_cents    │   └─────────────────┘   │  valid_from     │       │
//! │  │  deposit_cents  │                         └─────────────────┘       │
//! │  └─────────────────┘                                                   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    Supplier     │   │   BottleType    │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  Grihed         │   │  Glass          │                             │
//! │  │  Bringmeister   │   │  Plastic        │                             │
//! │  │  Gepa           │   └─────────────────┘                             │
//! │  │  Hygienelager   │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! A beverage crate is identified by its `grihed_id`, the article number
//! printed on the supplier's price list (e.g. `"B1278"`). There is no
//! surrogate key; the supplier's catalog is the source of truth.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Bottle Type
// =============================================================================

/// The material of the bottles in a crate.
///
/// Relevant for deposit handling: glass and plastic bottles go back into
/// different return streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BottleType {
    /// Returnable glass bottles.
    Glass,
    /// Returnable PET bottles.
    Plastic,
}

impl Default for BottleType {
    fn default() -> Self {
        BottleType::Glass
    }
}

// =============================================================================
// Supplier
// =============================================================================

/// The supplier an order sheet is addressed to.
///
/// Each supplier gets its own order page; a crate appears on exactly one
/// of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Supplier {
    /// The beverage wholesaler (bulk of the catalog).
    Grihed,
    /// Online supermarket for items Grihed does not carry.
    Bringmeister,
    /// Fair-trade coffee supplier.
    Gepa,
    /// Cleaning and hygiene supplies.
    Hygienelager,
}

impl Supplier {
    /// Returns the supplier name as printed on the order sheet.
    #[inline]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Supplier::Grihed => "Grihed",
            Supplier::Bringmeister => "Bringmeister",
            Supplier::Gepa => "GEPA",
            Supplier::Hygienelager => "Hygienelager",
        }
    }
}

impl std::fmt::Display for Supplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// =============================================================================
// Crate Inventory
// =============================================================================

/// Stock counts for one beverage crate.
///
/// `current_stock` is what the last stocktake found in the cellar;
/// `target_stock` is how many crates should be there after the next
/// delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CrateInventory {
    /// Crates counted in the cellar.
    pub current_stock: i64,

    /// Crates that should be in stock after ordering.
    pub target_stock: i64,
}

impl CrateInventory {
    /// Creates an inventory record.
    #[inline]
    pub const fn new(current_stock: i64, target_stock: i64) -> Self {
        CrateInventory {
            current_stock,
            target_stock,
        }
    }

    /// Returns how many crates are missing against the target.
    ///
    /// Never negative: overstock is a shortfall of zero, and a negative
    /// stock count (a stocktake artifact) reads as zero crates present.
    /// A negative target likewise reads as zero, which also keeps the
    /// subtraction inside i64 for any pair of counts.
    #[inline]
    pub const fn shortfall(&self) -> i64 {
        let current = if self.current_stock > 0 {
            self.current_stock
        } else {
            0
        };
        let target = if self.target_stock > 0 {
            self.target_stock
        } else {
            0
        };
        let missing = target - current;
        if missing > 0 {
            missing
        } else {
            0
        }
    }
}

impl Default for CrateInventory {
    fn default() -> Self {
        CrateInventory::new(0, 0)
    }
}

// =============================================================================
// Beverage Crate
// =============================================================================

/// A beverage crate as listed in the supplier catalog.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BeverageCrate {
    /// Supplier article number - business identifier (e.g. "B1278").
    pub grihed_id: String,

    /// Display name shown on the order sheet.
    pub name: String,

    /// Supplier this crate is ordered from.
    pub supplier: Supplier,

    /// Bottles per crate.
    pub number_of_bottles: i64,

    /// Bottle volume in milliliters.
    pub ml_per_bottle: i64,

    /// Net price per crate in cents (without deposit).
    pub price_cents: i64,

    /// Deposit per crate in cents.
    pub deposit_cents: i64,

    /// What one bottle sells for over the counter, in cents.
    pub selling_price_per_bottle_cents: i64,

    /// Bottle material.
    pub bottle_type: BottleType,

    /// Stock counts for this crate.
    pub inventory: CrateInventory,
}

impl BeverageCrate {
    /// Creates a catalog entry with the standard crate format.
    ///
    /// Defaults: 20 × 0.5l bottles, glass, standard deposit, empty
    /// inventory. Catalog maintenance adjusts the exceptions afterwards.
    pub fn new(
        grihed_id: impl Into<String>,
        name: impl Into<String>,
        supplier: Supplier,
        price_cents: i64,
        selling_price_per_bottle_cents: i64,
    ) -> Self {
        BeverageCrate {
            grihed_id: grihed_id.into(),
            name: name.into(),
            supplier,
            number_of_bottles: crate::STANDARD_BOTTLES_PER_CRATE,
            ml_per_bottle: crate::STANDARD_BOTTLE_ML,
            price_cents,
            deposit_cents: crate::DEFAULT_DEPOSIT_CENTS,
            selling_price_per_bottle_cents,
            bottle_type: BottleType::default(),
            inventory: CrateInventory::default(),
        }
    }

    /// Returns the net price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the deposit as a Money type.
    #[inline]
    pub fn deposit(&self) -> Money {
        Money::from_cents(self.deposit_cents)
    }

    /// Returns what one crate actually costs: net price plus deposit.
    ///
    /// ## Note
    /// This is the per-crate price the order sheet calculates with. The
    /// supplier invoices deposit alongside the net price, and the deposit
    /// is cash out the door until the empties go back.
    #[inline]
    pub fn total_price(&self) -> Money {
        Money::from_cents(self.price_cents.saturating_add(self.deposit_cents))
    }

    /// Returns the counter price of one bottle as Money.
    #[inline]
    pub fn selling_price_per_bottle(&self) -> Money {
        Money::from_cents(self.selling_price_per_bottle_cents)
    }

    /// Returns the revenue a full crate brings when sold out by the bottle.
    #[inline]
    pub fn sale_value_per_crate(&self) -> Money {
        self.selling_price_per_bottle()
            .multiply_quantity(self.number_of_bottles)
    }
}

// =============================================================================
// Crate Price
// =============================================================================

/// A dated price quote for one crate.
///
/// Supplier price lists change a few times a year; quotes are kept with
/// their start date so an order sheet can be priced as of any day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CratePrice {
    /// Net price per crate in cents.
    pub price_cents: i64,

    /// Deposit per crate in cents.
    pub deposit_cents: i64,

    /// First day this quote applies.
    #[ts(as = "String")]
    pub valid_from: DateTime<Utc>,
}

impl CratePrice {
    /// Creates a price quote.
    #[inline]
    pub const fn new(price_cents: i64, deposit_cents: i64, valid_from: DateTime<Utc>) -> Self {
        CratePrice {
            price_cents,
            deposit_cents,
            valid_from,
        }
    }

    /// Returns the net price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the deposit as Money.
    #[inline]
    pub fn deposit(&self) -> Money {
        Money::from_cents(self.deposit_cents)
    }

    /// Returns net price plus deposit, the per-crate cost of this quote.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.price_cents.saturating_add(self.deposit_cents))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
