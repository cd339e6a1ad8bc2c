//! # Order Module
//!
//! The order sheet: one line per beverage crate, recalculated on every
//! keystroke.
//!
//! ## Sheet Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Sheet Operations                               │
//! │                                                                         │
//! │  Form keystroke            Sheet operation             Line change      │
//! │  ──────────────            ───────────────             ───────────      │
//! │                                                                         │
//! │  Edit stock cell ────────► enter_current_stock() ───► stock count       │
//! │                                                                         │
//! │  Edit extra cell ────────► enter_extra_quantity() ──► extra crates      │
//! │                                                                         │
//! │  Type into qty cell ─────► enter_order_quantity() ──► manual override   │
//! │                                                                         │
//! │  Clear the qty cell ─────► enter_order_quantity() ──► back to automatic │
//! │                                                                         │
//! │  NOTE: Every operation recomputes the line it touched and returns the   │
//! │        fresh outputs, so the form can repaint that row immediately.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Hidden State
//! Outputs are a pure function of the line's inputs and params. Feeding the
//! same cell values again produces byte-identical outputs; there is no
//! accumulation across edits and no I/O anywhere in this module.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::input::{parse_count_or_zero, parse_optional_count};
use crate::money::Money;
use crate::types::{BeverageCrate, Supplier};
use crate::MAX_CRATE_COUNT;

// =============================================================================
// Quantity Mode
// =============================================================================

/// How the order quantity of a line is determined.
///
/// The form derives the mode from the order quantity cell: a typed number
/// switches the line to `Manual`, clearing the cell reverts it to `Auto`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum QuantityMode {
    /// Order whatever is missing to reach the target stock, plus extras.
    Auto,
    /// Order exactly the quantity the user typed.
    Manual,
}

impl Default for QuantityMode {
    fn default() -> Self {
        QuantityMode::Auto
    }
}

// =============================================================================
// Line Inputs
// =============================================================================

/// The editable cells of one order line.
///
/// All three come from free-text form fields and are stored already
/// coerced: counts are never negative, and a blank or unreadable quantity
/// cell is `None` rather than a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineInputs {
    /// Crates currently in the cellar (stocktake cell).
    pub current_stock: i64,

    /// Typed order quantity, if the user overrode the automatic one.
    pub manual_quantity: Option<i64>,

    /// Extra crates wanted on top of the automatic quantity.
    pub extra_quantity: i64,
}

impl LineInputs {
    /// Creates inputs with a known stock count and nothing else filled in.
    #[inline]
    pub const fn new(current_stock: i64) -> Self {
        LineInputs {
            current_stock,
            manual_quantity: None,
            extra_quantity: 0,
        }
    }

    /// Builds inputs from the raw text of the three form cells.
    ///
    /// Blank or unreadable text never fails: stock and extra read as 0,
    /// and an unreadable quantity cell counts as not filled in.
    ///
    /// ## Example
    /// ```rust
    /// use lager_core::order::LineInputs;
    ///
    /// let inputs = LineInputs::from_fields("", "", "abc");
    /// assert_eq!(inputs.current_stock, 0);
    /// assert_eq!(inputs.manual_quantity, None);
    /// assert_eq!(inputs.extra_quantity, 0);
    /// ```
    pub fn from_fields(current_stock: &str, order_quantity: &str, extra_quantity: &str) -> Self {
        LineInputs {
            current_stock: parse_count_or_zero(current_stock),
            manual_quantity: parse_optional_count(order_quantity),
            extra_quantity: parse_count_or_zero(extra_quantity),
        }
    }

    /// Returns the mode these inputs put the line in: manual exactly when
    /// the quantity cell holds a number.
    #[inline]
    pub const fn mode(&self) -> QuantityMode {
        match self.manual_quantity {
            Some(_) => QuantityMode::Manual,
            None => QuantityMode::Auto,
        }
    }
}

// =============================================================================
// Line Params
// =============================================================================

/// The fixed facts a line calculates with.
///
/// ## Price Freezing
/// Params are captured when the line is created, like a price printed on
/// the sheet. Repricing the catalog mid-edit does not move the numbers
/// under the user's cursor; a fresh sheet picks up the new price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineParams {
    /// What one crate costs, deposit included.
    pub price_per_crate: Money,

    /// Crates that should be in stock after the delivery.
    pub target_stock: i64,
}

impl LineParams {
    /// Creates params from a known price and target.
    #[inline]
    pub const fn new(price_per_crate: Money, target_stock: i64) -> Self {
        LineParams {
            price_per_crate,
            target_stock,
        }
    }

    /// Captures the params of a catalog entry: net price plus deposit, and
    /// the target stock from its inventory record.
    pub fn for_crate(beverage: &BeverageCrate) -> Self {
        LineParams {
            price_per_crate: beverage.total_price(),
            target_stock: beverage.inventory.target_stock,
        }
    }
}

// =============================================================================
// Line Outputs
// =============================================================================

/// The three derived cells of one order line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineOutputs {
    /// Crates to put on the order, never negative.
    pub order_quantity: i64,

    /// What the ordered crates will cost.
    pub order_price: Money,

    /// What the crates already in the cellar are worth.
    pub stock_value: Money,
}

// =============================================================================
// Line Calculation
// =============================================================================

/// Calculates the derived cells of one order line.
///
/// ## Rules
/// - `Auto`: order what is missing to reach the target, plus any extra
///   crates. Overstock orders nothing rather than a negative quantity.
/// - `Manual`: the typed quantity wins; target and extra crates are ignored.
///   An empty override reads as 0.
/// - Every count is read clamped to `0..=MAX_CRATE_COUNT`: a negative stock
///   count reads as an empty cellar, and a runaway count caps at the
///   ceiling instead of wrapping the cent math.
/// - Pure: same inputs, same outputs. Nothing else is read or written.
///
/// ## Example
/// ```rust
/// use lager_core::money::Money;
/// use lager_core::order::{calculate_line, LineInputs, LineParams, QuantityMode};
///
/// let inputs = LineInputs::new(5);
/// let params = LineParams::new(Money::from_cents(350), 20);
/// let outputs = calculate_line(QuantityMode::Auto, &inputs, &params);
///
/// assert_eq!(outputs.order_quantity, 15);
/// assert_eq!(outputs.order_price, Money::from_cents(5250));
/// assert_eq!(outputs.stock_value, Money::from_cents(1750));
/// ```
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Order Sheet: One Row                                                   │
/// │                                                                         │
/// │  Pilsator   price/crate 3,50€   target 20                               │
/// │                                                                         │
/// │  [stock: 5]   [extra: 0]   [quantity: ____]                             │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  calculate_line(Auto, ...) ← THIS FUNCTION                              │
/// │       │                                                                 │
/// │       ├── order_quantity = max(0, 20 - 5 + 0) = 15                      │
/// │       ├── order_price    = 15 × 3,50€ = 52,50€                          │
/// │       └── stock_value    =  5 × 3,50€ = 17,50€                          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn calculate_line(mode: QuantityMode, inputs: &LineInputs, params: &LineParams) -> LineOutputs {
    let current_stock = cell_count(inputs.current_stock);

    let order_quantity = match mode {
        QuantityMode::Auto => {
            (cell_count(params.target_stock) - current_stock + cell_count(inputs.extra_quantity))
                .max(0)
        }
        QuantityMode::Manual => cell_count(inputs.manual_quantity.unwrap_or(0)),
    };

    LineOutputs {
        order_quantity,
        order_price: params.price_per_crate.multiply_quantity(order_quantity),
        stock_value: params.price_per_crate.multiply_quantity(current_stock),
    }
}

/// Reads a count for the calculation: negative counts are an empty cell,
/// counts past [`MAX_CRATE_COUNT`](crate::MAX_CRATE_COUNT) cap at the
/// ceiling. With every operand bounded this way the shortfall formula
/// stays far inside i64.
fn cell_count(value: i64) -> i64 {
    value.clamp(0, MAX_CRATE_COUNT)
}

// =============================================================================
// Order Line
// =============================================================================

/// One row of an order sheet.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderLine {
    /// Article number of the crate this row orders.
    pub grihed_id: String,

    /// Display name shown in the row header.
    pub name: String,

    /// Editable cells.
    pub inputs: LineInputs,

    /// Frozen price and target.
    pub params: LineParams,

    /// Derived cells, kept in sync by `recompute`.
    pub outputs: LineOutputs,
}

impl OrderLine {
    /// Creates a row for a catalog entry, pre-filled with its stocktake
    /// count and already calculated.
    pub fn from_crate(beverage: &BeverageCrate) -> Self {
        let inputs = LineInputs::new(beverage.inventory.current_stock);
        let params = LineParams::for_crate(beverage);
        let outputs = calculate_line(inputs.mode(), &inputs, &params);

        OrderLine {
            grihed_id: beverage.grihed_id.clone(),
            name: beverage.name.clone(),
            inputs,
            params,
            outputs,
        }
    }

    /// Returns the mode the row is currently in.
    #[inline]
    pub const fn mode(&self) -> QuantityMode {
        self.inputs.mode()
    }

    /// Recalculates the derived cells from the current inputs and params.
    ///
    /// ## Returns
    /// A copy of the fresh outputs, for repainting the row.
    pub fn recompute(&mut self) -> LineOutputs {
        self.outputs = calculate_line(self.mode(), &self.inputs, &self.params);
        self.outputs
    }
}

// =============================================================================
// Order Sheet
// =============================================================================

/// The order sheet for one supplier.
///
/// ## Invariants
/// - Rows are unique by `grihed_id` (`add_line` rejects duplicates)
/// - Every row belongs to the sheet's supplier
/// - Row order is the catalog's article number order
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderSheet {
    /// Supplier this sheet will be sent to.
    pub supplier: Supplier,

    /// Rows of the sheet.
    pub lines: Vec<OrderLine>,
}

impl OrderSheet {
    /// Creates an empty sheet for a supplier.
    pub fn new(supplier: Supplier) -> Self {
        OrderSheet {
            supplier,
            lines: Vec::new(),
        }
    }

    /// Builds the sheet for a supplier from the catalog: one pre-filled,
    /// pre-calculated row per crate that supplier carries.
    pub fn from_catalog(supplier: Supplier, catalog: &Catalog) -> Self {
        let lines = catalog
            .for_supplier(supplier)
            .map(OrderLine::from_crate)
            .collect();

        OrderSheet { supplier, lines }
    }

    /// Appends a row for a catalog entry.
    ///
    /// ## Behavior
    /// - Rejects a crate from a different supplier
    /// - Rejects an article number already on the sheet
    pub fn add_line(&mut self, beverage: &BeverageCrate) -> CoreResult<()> {
        if beverage.supplier != self.supplier {
            return Err(ValidationError::InvalidFormat {
                field: "supplier".to_string(),
                reason: format!(
                    "crate {} belongs to {}",
                    beverage.grihed_id, beverage.supplier
                ),
            }
            .into());
        }

        if self.line(&beverage.grihed_id).is_some() {
            return Err(ValidationError::Duplicate {
                field: "grihed_id".to_string(),
                value: beverage.grihed_id.clone(),
            }
            .into());
        }

        self.lines.push(OrderLine::from_crate(beverage));
        Ok(())
    }

    /// Looks up a row by article number.
    pub fn line(&self, grihed_id: &str) -> Option<&OrderLine> {
        self.lines.iter().find(|line| line.grihed_id == grihed_id)
    }

    fn line_mut(&mut self, grihed_id: &str) -> CoreResult<&mut OrderLine> {
        self.lines
            .iter_mut()
            .find(|line| line.grihed_id == grihed_id)
            .ok_or_else(|| CoreError::LineNotFound(grihed_id.to_string()))
    }

    /// Applies an edit of the stock cell and recalculates the row.
    ///
    /// Blank or unreadable text reads as an empty cellar.
    pub fn enter_current_stock(&mut self, grihed_id: &str, text: &str) -> CoreResult<LineOutputs> {
        let line = self.line_mut(grihed_id)?;
        line.inputs.current_stock = parse_count_or_zero(text);
        Ok(line.recompute())
    }

    /// Applies an edit of the extra crates cell and recalculates the row.
    pub fn enter_extra_quantity(&mut self, grihed_id: &str, text: &str) -> CoreResult<LineOutputs> {
        let line = self.line_mut(grihed_id)?;
        line.inputs.extra_quantity = parse_count_or_zero(text);
        Ok(line.recompute())
    }

    /// Applies an edit of the order quantity cell and recalculates the row.
    ///
    /// A typed number overrides the automatic quantity; clearing the cell
    /// (or typing something unreadable) hands the row back to automatic.
    pub fn enter_order_quantity(&mut self, grihed_id: &str, text: &str) -> CoreResult<LineOutputs> {
        let line = self.line_mut(grihed_id)?;
        line.inputs.manual_quantity = parse_optional_count(text);
        Ok(line.recompute())
    }

    /// Recalculates every row.
    ///
    /// The entry points above keep rows fresh on their own; this is for
    /// callers that edited `lines` directly.
    pub fn recompute_all(&mut self) {
        for line in &mut self.lines {
            line.recompute();
        }
    }

    /// Returns the number of rows on the sheet.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Checks if the sheet has no rows.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total crates across all rows.
    pub fn crates_to_order(&self) -> i64 {
        self.lines.iter().map(|line| line.outputs.order_quantity).sum()
    }

    /// What the whole order will cost.
    pub fn order_total(&self) -> Money {
        let mut total = Money::zero();
        for line in &self.lines {
            total += line.outputs.order_price;
        }
        total
    }

    /// What everything still in the cellar is worth.
    pub fn stock_value_total(&self) -> Money {
        let mut total = Money::zero();
        for line in &self.lines {
            total += line.outputs.stock_value;
        }
        total
    }
}

// =============================================================================
// Sheet Totals
// =============================================================================

/// Sheet footer summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SheetTotals {
    pub line_count: usize,
    pub crates_to_order: i64,
    pub order_total: Money,
    pub stock_value_total: Money,
}

impl From<&OrderSheet> for SheetTotals {
    fn from(sheet: &OrderSheet) -> Self {
        SheetTotals {
            line_count: sheet.line_count(),
            crates_to_order: sheet.crates_to_order(),
            order_total: sheet.order_total(),
            stock_value_total: sheet.stock_value_total(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
