//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    (1.005 * 100).toFixed(0) = "100"     ❌ WRONG! (should be 101)       │
//! │                                                                         │
//! │  Splitting a bill means dividing, and dividing floats twice            │
//! │  (tip first, then per person) rounds twice.                            │
//! │                                                                         │
//! │  OUR SOLUTION: Exact Bill + One Rounding                                │
//! │    bill        = every typed digit, kept as-is (BillAmount)            │
//! │    result      = round_half_up(bill × rate_bps / (100 × people))      │
//! │    output      = whole cents (Money)                                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tipsplit_core::validation::parse_bill;
//!
//! let bill = parse_bill("100").unwrap();
//!
//! // 10% tip split four ways
//! let tip_each = bill.split_at_rate(1000, 4);
//! assert_eq!(tip_each.to_string(), "$2.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Basis points in 100%.
pub const BPS_PER_WHOLE: u32 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: Display handles negative amounts as `-$X.XX`
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  "100.50" ──► parse_bill ──► BillAmount (exact)                         │
/// │                                  │                                      │
/// │                                  ├──► split_at_rate(tip bps)            │
/// │                                  │              ──► Money(251)  "$2.51" │
/// │                                  └──► split_at_rate(10000 + tip bps)    │
/// │                                                 ──► Money(2764) "$27.64"│
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(2750).dollars(), 27);
    /// assert_eq!(Money::from_cents(-550).dollars(), -5);
    /// ```
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }
}

// =============================================================================
// Bill Amount
// =============================================================================

/// A bill exactly as typed: whole dollars plus every fractional digit.
///
/// Only the per-person results are rounded, so the bill itself keeps
/// sub-cent digits (`"10.005"` stays 10.005, not $10.01).
///
/// ## Invariants
/// - Non-negative
/// - `fraction` holds digit values 0-9, without trailing zeros
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BillAmount {
    dollars: u64,
    fraction: Vec<u8>,
}

impl BillAmount {
    /// Builds an amount from whole dollars and the ASCII digits after the point.
    pub(crate) fn from_digits(dollars: u64, fraction: &str) -> Self {
        BillAmount {
            dollars,
            fraction: fraction
                .trim_end_matches('0')
                .bytes()
                .map(|b| b - b'0')
                .collect(),
        }
    }

    /// Checks if the amount is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.dollars == 0 && self.fraction.is_empty()
    }

    /// Applies a rate and splits the result evenly, rounding once.
    ///
    /// Computes `self × bps / 10000 / parts` in cents on the exact value and
    /// rounds half up to whole cents. Passing `10000 + tip_bps` yields the
    /// per-person total including tip.
    ///
    /// `parts == 0` returns zero; the calculator never gets that far.
    ///
    /// ## Exact Arithmetic
    /// ```text
    /// cents = ⌊(2·bill·bps + d) / 2d⌋        d = 100 × parts
    ///       = ⌊(⌊2·bill·bps⌋ + d) / 2d⌋      (d is an integer)
    ///
    /// ⌊2·bill·bps⌋ = 2·bps·dollars + ⌊2·bps·fraction⌋
    /// ```
    /// The last term is the carry out of multiplying the fraction digits by
    /// `2·bps` from the right, so no digit is ever dropped.
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_core::validation::parse_bill;
    ///
    /// let bill = parse_bill("10.005").unwrap();
    ///
    /// // 50% tip for one: 5.0025 → $5.00
    /// assert_eq!(bill.split_at_rate(5000, 1).cents(), 500);
    /// // Bill plus 50% tip: 15.0075 → $15.01
    /// assert_eq!(bill.split_at_rate(15000, 1).cents(), 1501);
    /// ```
    pub fn split_at_rate(&self, bps: u32, parts: u32) -> Money {
        if parts == 0 {
            return Money::zero();
        }

        // u128 so dollars × bps never overflows
        let twice_rate = 2 * bps as u128;
        let fraction_carry = self
            .fraction
            .iter()
            .rev()
            .fold(0u128, |carry, digit| (twice_rate * *digit as u128 + carry) / 10);
        let twice_scaled = twice_rate * self.dollars as u128 + fraction_carry;

        let denominator = 100 * parts as u128;
        let cents = (twice_scaled + denominator) / (2 * denominator);

        Money::from_cents(i64::try_from(cents).unwrap_or(i64::MAX))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display renders the widget's currency format: `$27.50`, `-$5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(2750)), "$27.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    fn bill(dollars: u64, fraction: &str) -> BillAmount {
        BillAmount::from_digits(dollars, fraction)
    }

    #[test]
    fn test_bill_amount_trims_trailing_zeros() {
        assert_eq!(bill(12, "500"), bill(12, "5"));
        assert!(bill(0, "000").is_zero());
        assert!(!bill(0, "001").is_zero());
    }

    #[test]
    fn test_split_at_rate_exact() {
        let hundred = bill(100, "");
        assert_eq!(hundred.split_at_rate(1000, 4).cents(), 250);
        assert_eq!(hundred.split_at_rate(11000, 4).cents(), 2750);
        assert_eq!(hundred.split_at_rate(10000, 4).cents(), 2500);
    }

    #[test]
    fn test_split_at_rate_rounds_half_up() {
        // $0.10 × 15% = 1.5¢, / 4 = 0.375¢ → 0¢
        assert_eq!(bill(0, "10").split_at_rate(1500, 4).cents(), 0);
        // $0.10 × 115% = 11.5¢, / 4 = 2.875¢ → 3¢
        assert_eq!(bill(0, "10").split_at_rate(11500, 4).cents(), 3);
        // 1¢ / 2 = 0.5¢ → 1¢ (half goes up, not to even)
        assert_eq!(bill(0, "01").split_at_rate(10000, 2).cents(), 1);
        // 5¢ / 2 = 2.5¢ → 3¢
        assert_eq!(bill(0, "05").split_at_rate(10000, 2).cents(), 3);
    }

    #[test]
    fn test_sub_cent_bill_is_not_rounded_first() {
        // 10.005 × 50% = 5.0025 → $5.00, not 10.01 × 50% = $5.01
        assert_eq!(bill(10, "005").split_at_rate(5000, 1).cents(), 500);
        // 10.005 × 150% = 15.0075 → $15.01, not $15.02
        assert_eq!(bill(10, "005").split_at_rate(15000, 1).cents(), 1501);
        // 0.006 × 50% = 0.3¢ → $0.00
        assert_eq!(bill(0, "006").split_at_rate(5000, 1).cents(), 0);
        // 0.5¢ exactly → 1¢
        assert_eq!(bill(0, "005").split_at_rate(10000, 1).cents(), 1);
    }

    #[test]
    fn test_split_at_rate_keeps_every_fraction_digit() {
        let just_below = bill(0, "00499999999999999999999999999999");
        let just_above = bill(0, "00500000000000000000000000000001");
        assert_eq!(just_below.split_at_rate(10000, 1).cents(), 0);
        assert_eq!(just_above.split_at_rate(10000, 1).cents(), 1);
    }

    #[test]
    fn test_split_at_rate_zero_parts() {
        assert_eq!(bill(100, "").split_at_rate(1000, 0), Money::zero());
    }

    /// $10.00 split three ways loses a cent per person overall; each share
    /// is rounded independently.
    #[test]
    fn test_split_precision_loss_documented() {
        let share = bill(10, "").split_at_rate(BPS_PER_WHOLE, 3);
        assert_eq!(share.cents(), 333);
        assert_eq!(1000 - share.cents() * 3, 1);
    }

    #[test]
    fn test_split_at_rate_large_bill_does_not_overflow() {
        let share = bill(crate::MAX_BILL_DOLLARS, "99999").split_at_rate(15000, 1);
        assert_eq!(share.cents(), 1_500_000_000_000_000);
    }
}
