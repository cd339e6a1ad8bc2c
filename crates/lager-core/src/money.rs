//! # Money Module
//!
//! The `Money` type: euro amounts as whole cents.
//!
//! ## Why Whole Cents?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  WHY NOT f64 EUROS?                                                     │
//! │                                                                         │
//! │  Binary floating point cannot represent 0,10€:                          │
//! │    0.1 + 0.2 == 0.30000000000000004                                     │
//! │                                                                         │
//! │  The order form recomputes its prices on every keystroke. Rounding     │
//! │  noise of that kind would creep into the sheet totals within a single  │
//! │  editing session.                                                       │
//! │                                                                         │
//! │  Money stores whole cents in an i64 instead:                            │
//! │    14,20€ per crate        == Money(1420)                               │
//! │    15 crates × 1420 cents  == 21300 cents, exactly                      │
//! │                                                                         │
//! │  Rendering as "213,00€" is then string formatting, not rounding.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use lager_core::money::Money;
//!
//! let net = Money::from_cents(970);     // 9,70€ net per crate
//! let deposit = Money::from_cents(450); // 4,50€ deposit per crate
//! let per_crate = net + deposit;
//!
//! assert_eq!(format!("{}", per_crate), "14,20€");
//! assert_eq!(Money::parse_german("14,20"), Some(per_crate));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in whole euro cents.
///
/// ## Design Decisions
/// - **Signed `i64`**: corrections and deposit credits may dip below zero
/// - **Newtype over the raw cents**: a price cannot be mixed up with a
///   crate count by accident
/// - **Transparent serde**: serializes as the bare cent number
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  BeverageCrate.price_cents ──┬──► LineParams.price_per_crate            │
/// │                              │                                          │
/// │                              └──► order price / stock value per line    │
/// │                                                                         │
/// │  EVERY monetary value in the ordering form flows through this type     │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Wraps a cent amount.
    ///
    /// ## Example
    /// ```rust
    /// use lager_core::money::Money;
    ///
    /// let price = Money::from_cents(1420); // 14,20€
    /// assert_eq!(price.cents(), 1420);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Builds an amount from euros and cents.
    ///
    /// For an amount below zero, put the sign on the euro part only:
    /// `from_major_minor(-5, 50)` is -5,50€.
    ///
    /// ## Example
    /// ```rust
    /// use lager_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(14, 20).cents(), 1420);
    /// assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Parses German price text into Money.
    ///
    /// German price lists write a comma before the cents and an optional dot
    /// as thousands separator: `"14,20"`, `"1.234,56"`. Dots are stripped
    /// entirely, so `"1.420"` reads as 1420 whole euros, not 1,42€.
    ///
    /// ## Returns
    /// `None` for empty text or text that is not a price (letters, more than
    /// two decimal digits, stray separators). This mirrors the coerce-rather-
    /// than-fail policy of the form: callers decide what a missing price
    /// means.
    ///
    /// ## Example
    /// ```rust
    /// use lager_core::money::Money;
    ///
    /// assert_eq!(Money::parse_german("14,20"), Some(Money::from_cents(1420)));
    /// assert_eq!(Money::parse_german("1.234,56"), Some(Money::from_cents(123456)));
    /// assert_eq!(Money::parse_german("7"), Some(Money::from_cents(700)));
    /// assert_eq!(Money::parse_german(""), None);
    /// assert_eq!(Money::parse_german("abc"), None);
    /// ```
    pub fn parse_german(text: &str) -> Option<Money> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        // Dots are thousands separators in German price text; drop them all.
        let cleaned: String = unsigned.chars().filter(|&c| c != '.').collect();

        let (whole, fraction) = match cleaned.split_once(',') {
            Some((whole, fraction)) => (whole, fraction),
            None => (cleaned.as_str(), ""),
        };

        // Prices carry at most two decimal places; a second comma is not a price.
        if fraction.len() > 2 || fraction.contains(',') {
            return None;
        }
        if whole.is_empty() && fraction.is_empty() {
            return None;
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return None;
        }

        let whole_cents = if whole.is_empty() {
            0
        } else {
            whole.parse::<i64>().ok()?.checked_mul(100)?
        };
        let fraction_cents = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().ok()? * 10,
            _ => fraction.parse::<i64>().ok()?,
        };

        let cents = whole_cents.checked_add(fraction_cents)?;
        Some(Money(if negative { -cents } else { cents }))
    }

    /// The raw cent amount.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// The euro part, truncated toward zero (`-550` cents reads as `-5`).
    #[inline]
    pub const fn euros(&self) -> i64 {
        self.0 / 100
    }

    /// The cent part after the comma, always 0 to 99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// An amount of zero cents.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks for exactly zero cents.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks for an amount below zero (a credit or correction).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Scales a unit price by a crate count.
    ///
    /// Cent times quantity is exact, so two-decimal display never has to
    /// round the result.
    ///
    /// ## Note
    /// Saturates at the i64 limits instead of wrapping, so a runaway
    /// quantity can never turn a price negative. The form clamps its counts
    /// to [`MAX_CRATE_COUNT`](crate::MAX_CRATE_COUNT) before they get here.
    ///
    /// ## Example
    /// ```rust
    /// use lager_core::money::Money;
    ///
    /// let price_per_crate = Money::from_cents(1420); // 14,20€
    /// let order_price = price_per_crate.multiply_quantity(15);
    /// assert_eq!(order_price.cents(), 21300); // 213,00€
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Crate: Pilsator 14,20€
    /// Order quantity: 15
    ///      │
    ///      ▼
    /// multiply_quantity(15) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Order price: 213,00€
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders the amount the way a German price tag does: decimal comma,
/// exactly two decimal places, trailing euro sign.
///
/// ## Note
/// This is the format the order form writes into its price cells
/// (`213,00€`). Further localization is the frontend's concern.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{},{:02}€",
            sign,
            self.euros().abs(),
            self.cents_part()
        )
    }
}

/// An untouched price cell holds zero cents.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Adds two amounts cent for cent.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Accumulation for running totals (`total += line_price`).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Operator form of [`Money::multiply_quantity`].
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents_and_parts() {
        let price = Money::from_cents(1420);
        assert_eq!(price.cents(), 1420);
        assert_eq!(price.euros(), 14);
        assert_eq!(price.cents_part(), 20);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(14, 20), Money::from_cents(1420));
        assert_eq!(Money::from_major_minor(-5, 50), Money::from_cents(-550));
    }

    #[test]
    fn test_display_german_price_format() {
        assert_eq!(format!("{}", Money::from_cents(1420)), "14,20€");
        assert_eq!(format!("{}", Money::from_cents(500)), "5,00€");
        assert_eq!(format!("{}", Money::from_cents(5)), "0,05€");
        assert_eq!(format!("{}", Money::from_cents(0)), "0,00€");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-5,50€");
        assert_eq!(format!("{}", Money::from_cents(-5)), "-0,05€");
    }

    #[test]
    fn test_addition_and_accumulation() {
        let net = Money::from_cents(970);
        let deposit = Money::from_cents(450);
        assert_eq!(net + deposit, Money::from_cents(1420));

        let mut total = Money::zero();
        total += Money::from_cents(5250);
        total += Money::from_cents(800);
        assert_eq!(total, Money::from_cents(6050));
    }

    #[test]
    fn test_quantity_scaling() {
        let per_crate = Money::from_cents(1420);
        assert_eq!(per_crate.multiply_quantity(15), Money::from_cents(21300));
        assert_eq!(per_crate.multiply_quantity(0), Money::zero());
        assert_eq!(per_crate * 15, per_crate.multiply_quantity(15));
    }

    #[test]
    fn test_quantity_scaling_saturates_at_the_limits() {
        let price = Money::from_cents(i64::MAX / 2);
        assert_eq!(price.multiply_quantity(3), Money::from_cents(i64::MAX));
        assert_eq!(price * 3, Money::from_cents(i64::MAX));
        assert!(!price.multiply_quantity(3).is_negative());
    }

    #[test]
    fn test_sign_checks() {
        assert!(Money::zero().is_zero());
        assert!(!Money::zero().is_negative());
        assert!(Money::from_cents(-1).is_negative());
        assert!(!Money::from_cents(100).is_negative());
    }

    #[test]
    fn test_parse_german_basic() {
        assert_eq!(Money::parse_german("14,20"), Some(Money::from_cents(1420)));
        assert_eq!(Money::parse_german("4,5"), Some(Money::from_cents(450)));
        assert_eq!(Money::parse_german("7"), Some(Money::from_cents(700)));
        assert_eq!(Money::parse_german("0,99"), Some(Money::from_cents(99)));
        assert_eq!(Money::parse_german(",50"), Some(Money::from_cents(50)));
    }

    #[test]
    fn test_parse_german_thousands_separator() {
        assert_eq!(
            Money::parse_german("1.234,56"),
            Some(Money::from_cents(123456))
        );
        // A lone dot is a thousands separator, never a decimal point.
        assert_eq!(Money::parse_german("1.420"), Some(Money::from_cents(142000)));
    }

    #[test]
    fn test_parse_german_whitespace_and_sign() {
        assert_eq!(
            Money::parse_german("  14,20  "),
            Some(Money::from_cents(1420))
        );
        assert_eq!(Money::parse_german("-5,50"), Some(Money::from_cents(-550)));
    }

    #[test]
    fn test_parse_german_rejects_non_prices() {
        assert_eq!(Money::parse_german(""), None);
        assert_eq!(Money::parse_german("   "), None);
        assert_eq!(Money::parse_german("abc"), None);
        assert_eq!(Money::parse_german("14,2a"), None);
        assert_eq!(Money::parse_german("1,234,56"), None);
        assert_eq!(Money::parse_german("3,456"), None); // three decimal digits
        assert_eq!(Money::parse_german(","), None);
        assert_eq!(Money::parse_german("-"), None);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let price = Money::from_cents(123456);
        let shown = format!("{}", price);
        assert_eq!(shown, "1234,56€");
        assert_eq!(
            Money::parse_german(shown.trim_end_matches('€')),
            Some(price)
        );
    }
}
