//! # Split Calculator
//!
//! Turns the bill text, people text and tip index into per-person amounts.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "100", "4", tip index 2                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  parse_bill → 100 (exact)    parse_people → 4                           │
//! │       │      (either fails or ≤ 0 → {$0.00, $0.00})                     │
//! │       ▼                                                                 │
//! │  rate_for_index(2) → 10%     (-1 or out of range → 0%)                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  tip   = $100.00 × 10%        = $10.00                                  │
//! │  total = $100.00 + tip        = $110.00                                 │
//! │  tip / 4   → $2.50                                                      │
//! │  total / 4 → $27.50                                                     │
//! │                                                                         │
//! │  Each per-person value is rounded ONCE, half up, to whole cents.        │
//! │  The bill is never rounded: "10.005" is split as 10.005.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Invalid input is not an error here: the fallback `{0.00, 0.00}` is the
//! defined output. Use [`FieldValidity`](crate::validation::FieldValidity)
//! to learn which field was at fault.

use crate::money::{BillAmount, BPS_PER_WHOLE};
use crate::types::{rate_for_index, SplitResult, TipRate};
use crate::validation::{parse_bill, parse_people};

/// Computes the per-person tip and total.
///
/// ## Example
/// ```rust
/// use tipsplit_core::calculator::compute_split;
///
/// let split = compute_split("100", "4", 2);
/// assert_eq!(split.tip_per_person.to_string(), "$2.50");
/// assert_eq!(split.total_per_person.to_string(), "$27.50");
///
/// // No tip selected is a 0% tip, not a refusal
/// let split = compute_split("100", "4", -1);
/// assert_eq!(split.total_per_person.to_string(), "$25.00");
/// ```
pub fn compute_split(bill_text: &str, people_text: &str, tip_index: i64) -> SplitResult {
    compute_split_at_rate(bill_text, people_text, rate_for_index(tip_index))
}

/// Same as [`compute_split`] with the rate already resolved.
pub fn compute_split_at_rate(bill_text: &str, people_text: &str, rate: TipRate) -> SplitResult {
    let (Ok(bill), Ok(people)) = (parse_bill(bill_text), parse_people(people_text)) else {
        return SplitResult::default();
    };

    split_bill(&bill, people, rate)
}

/// Splits an already-validated bill.
///
/// `bill × (100% + rate)` is divided as one exact fraction, so the total
/// is not affected by how the tip share was rounded.
pub fn split_bill(bill: &BillAmount, people: u32, rate: TipRate) -> SplitResult {
    SplitResult {
        tip_per_person: bill.split_at_rate(rate.bps(), people),
        total_per_person: bill.split_at_rate(BPS_PER_WHOLE + rate.bps(), people),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
