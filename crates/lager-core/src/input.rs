//! # Input Module
//!
//! Coercion of raw form text into counts.
//!
//! ## The Coerce-Don't-Fail Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  An order form recomputes on EVERY keystroke. Half-typed numbers,      │
//! │  cleared fields, and pasted garbage are normal states, not errors:     │
//! │                                                                         │
//! │    ""      ──► 0        (field not filled in yet)                      │
//! │    "abc"   ──► 0        (not a number)                                 │
//! │    "12abc" ──► 0        (not a number either; no prefix salvage)       │
//! │    "-3"    ──► 0        (counts of physical crates are never negative) │
//! │    " 42 "  ──► 42                                                      │
//! │                                                                         │
//! │  Surfacing a ValidationError mid-keystroke would make the form         │
//! │  unusable. These helpers NEVER fail.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Counts also cap at [`MAX_CRATE_COUNT`](crate::MAX_CRATE_COUNT): an
//! 18-digit "stock count" is a typo, and capping it keeps every price the
//! sheet derives from it inside exact cent arithmetic.

use crate::MAX_CRATE_COUNT;

// =============================================================================
// Count Parsing
// =============================================================================

/// Parses form text as a crate count, coercing anything unusable to 0.
///
/// ## Rules
/// 1. Leading/trailing whitespace is ignored
/// 2. Text that is not entirely an integer yields 0 (`"12abc"` is 0, not 12)
/// 3. Negative counts are clamped to 0
/// 4. Counts past [`MAX_CRATE_COUNT`](crate::MAX_CRATE_COUNT) cap at the
///    ceiling
///
/// ## Example
/// ```rust
/// use lager_core::input::parse_count_or_zero;
/// use lager_core::MAX_CRATE_COUNT;
///
/// assert_eq!(parse_count_or_zero("42"), 42);
/// assert_eq!(parse_count_or_zero(""), 0);
/// assert_eq!(parse_count_or_zero("abc"), 0);
/// assert_eq!(parse_count_or_zero("-3"), 0);
/// assert_eq!(parse_count_or_zero("100000000000000000"), MAX_CRATE_COUNT);
/// ```
pub fn parse_count_or_zero(raw: &str) -> i64 {
    raw.trim().parse::<i64>().unwrap_or(0).clamp(0, MAX_CRATE_COUNT)
}

/// Parses form text as an optional crate count.
///
/// Distinguishes "the user typed a number" from "the field is blank or
/// garbage". The order quantity column needs this: a typed value switches
/// the line to manual quantity, while a blank one leaves it automatic.
/// Typed numbers clamp to `0..=MAX_CRATE_COUNT` like every other count.
///
/// ## Example
/// ```rust
/// use lager_core::input::parse_optional_count;
///
/// assert_eq!(parse_optional_count("7"), Some(7));
/// assert_eq!(parse_optional_count("-7"), Some(0));
/// assert_eq!(parse_optional_count(""), None);
/// assert_eq!(parse_optional_count("abc"), None);
/// ```
pub fn parse_optional_count(raw: &str) -> Option<i64> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .map(|n| n.clamp(0, MAX_CRATE_COUNT))
}

// =============================================================================
// Unit Tests
// =============================================================================
