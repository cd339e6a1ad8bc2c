//! # Catalog Module
//!
//! The beverage catalog and its price history.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Catalog and Prices                                 │
//! │                                                                         │
//! │  Supplier price list (PDF)                                              │
//! │       │  (parsed upstream, one CratePrice per article)                  │
//! │       ▼                                                                 │
//! │  PriceBook ── add() ──► quotes per grihed_id, newest first              │
//! │       │                                                                 │
//! │       │  reprice_from(book, as_of)                                      │
//! │       ▼                                                                 │
//! │  Catalog ── BeverageCrate carries the price the sheet calculates with   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  OrderSheet::from_catalog(supplier, &catalog)                           │
//! │                                                                         │
//! │  The catalog refuses malformed entries (validation module); the order  │
//! │  form never sees a crate that did not pass it.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{BeverageCrate, CrateInventory, CratePrice, Supplier};
use crate::validation::{
    validate_bottle_count, validate_bottle_volume_ml, validate_crate_name, validate_deposit_cents,
    validate_grihed_id, validate_price_cents, validate_selling_price_cents, validate_stock_level,
};

// =============================================================================
// Catalog
// =============================================================================

/// All beverage crates known to the system, keyed by grihed article number.
///
/// ## Invariants
/// - Article numbers are unique (insert rejects duplicates)
/// - Every entry passed the validation module on the way in
/// - Iteration order is article number order, so order sheets and exports
///   are deterministic
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Catalog {
    crates: BTreeMap<String, BeverageCrate>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog {
            crates: BTreeMap::new(),
        }
    }

    /// Adds a crate to the catalog.
    ///
    /// ## Behavior
    /// - Runs all field validators before touching the map
    /// - Rejects an article number that is already present
    pub fn insert(&mut self, beverage: BeverageCrate) -> CoreResult<()> {
        validate_grihed_id(&beverage.grihed_id)?;
        validate_crate_name(&beverage.name)?;
        validate_price_cents(beverage.price_cents)?;
        validate_deposit_cents(beverage.deposit_cents)?;
        validate_selling_price_cents(beverage.selling_price_per_bottle_cents)?;
        validate_bottle_count(beverage.number_of_bottles)?;
        validate_bottle_volume_ml(beverage.ml_per_bottle)?;
        validate_stock_level("current_stock", beverage.inventory.current_stock)?;
        validate_stock_level("target_stock", beverage.inventory.target_stock)?;

        if self.crates.contains_key(&beverage.grihed_id) {
            return Err(ValidationError::Duplicate {
                field: "grihed_id".to_string(),
                value: beverage.grihed_id.clone(),
            }
            .into());
        }

        self.crates.insert(beverage.grihed_id.clone(), beverage);
        Ok(())
    }

    /// Looks up a crate by article number.
    pub fn get(&self, grihed_id: &str) -> Option<&BeverageCrate> {
        self.crates.get(grihed_id)
    }

    /// Looks up a crate by article number, failing if it is unknown.
    pub fn require(&self, grihed_id: &str) -> CoreResult<&BeverageCrate> {
        self.get(grihed_id)
            .ok_or_else(|| CoreError::CrateNotFound(grihed_id.to_string()))
    }

    /// Records a stocktake result for one crate.
    ///
    /// Strict like the rest of the catalog: a negative count is rejected
    /// here, unlike in the live order form where it clamps to zero.
    pub fn set_inventory(&mut self, grihed_id: &str, inventory: CrateInventory) -> CoreResult<()> {
        validate_stock_level("current_stock", inventory.current_stock)?;
        validate_stock_level("target_stock", inventory.target_stock)?;

        let beverage = self
            .crates
            .get_mut(grihed_id)
            .ok_or_else(|| CoreError::CrateNotFound(grihed_id.to_string()))?;
        beverage.inventory = inventory;
        Ok(())
    }

    /// Updates catalog prices from the quotes applicable at `as_of`.
    ///
    /// Crates without an applicable quote keep their current price. Quotes
    /// are validated like any other catalog write, and one bad quote fails
    /// the whole repricing before any entry is touched.
    ///
    /// ## Returns
    /// The number of crates whose price was updated.
    pub fn reprice_from(&mut self, book: &PriceBook, as_of: DateTime<Utc>) -> CoreResult<usize> {
        // First pass checks every applicable quote, so a bad one cannot
        // leave the catalog half repriced.
        for grihed_id in self.crates.keys() {
            if let Some(quote) = book.current(grihed_id, as_of) {
                validate_price_cents(quote.price_cents)?;
                validate_deposit_cents(quote.deposit_cents)?;
            }
        }

        let mut updated = 0;
        for (grihed_id, beverage) in self.crates.iter_mut() {
            if let Some(quote) = book.current(grihed_id, as_of) {
                beverage.price_cents = quote.price_cents;
                beverage.deposit_cents = quote.deposit_cents;
                updated += 1;
            }
        }
        Ok(updated)
    }

    /// Iterates all crates in article number order.
    pub fn iter(&self) -> impl Iterator<Item = &BeverageCrate> {
        self.crates.values()
    }

    /// Iterates the crates ordered from one supplier, in article number order.
    pub fn for_supplier(&self, supplier: Supplier) -> impl Iterator<Item = &BeverageCrate> {
        self.crates
            .values()
            .filter(move |beverage| beverage.supplier == supplier)
    }

    /// Returns the number of crates in the catalog.
    pub fn len(&self) -> usize {
        self.crates.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.crates.is_empty()
    }
}

// =============================================================================
// Price Book
// =============================================================================

/// Dated price quotes per article number, newest first.
///
/// ## Why Keep History?
/// Price lists arrive a few times a year and apply from a given day.
/// Keeping every quote lets a sheet be priced as of order day, and lets
/// bookkeeping re-derive what an old order cost.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceBook {
    quotes: BTreeMap<String, Vec<CratePrice>>,
}

impl PriceBook {
    /// Creates an empty price book.
    pub fn new() -> Self {
        PriceBook {
            quotes: BTreeMap::new(),
        }
    }

    /// Records a quote for an article.
    ///
    /// Quotes are kept sorted by `valid_from`, newest first. A quote with
    /// the same start date as an existing one takes precedence over it.
    pub fn add(&mut self, grihed_id: impl Into<String>, quote: CratePrice) {
        let quotes = self.quotes.entry(grihed_id.into()).or_default();
        let pos = quotes
            .iter()
            .position(|existing| existing.valid_from <= quote.valid_from)
            .unwrap_or(quotes.len());
        quotes.insert(pos, quote);
    }

    /// Returns the quote applicable at `as_of`: the newest quote whose
    /// `valid_from` is not in the future.
    pub fn current(&self, grihed_id: &str, as_of: DateTime<Utc>) -> Option<&CratePrice> {
        self.quotes
            .get(grihed_id)?
            .iter()
            .find(|quote| quote.valid_from <= as_of)
    }

    /// Returns the newest quote for an article, regardless of date.
    pub fn latest(&self, grihed_id: &str) -> Option<&CratePrice> {
        self.quotes.get(grihed_id)?.first()
    }

    /// Returns all quotes for an article, newest first.
    pub fn history(&self, grihed_id: &str) -> &[CratePrice] {
        self.quotes
            .get(grihed_id)
            .map(|quotes| quotes.as_slice())
            .unwrap_or(&[])
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
