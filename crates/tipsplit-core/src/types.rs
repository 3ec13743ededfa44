//! # Domain Types
//!
//! Core domain types used throughout tipsplit.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    TipRate      │   │  TipSelection   │   │  SplitResult    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  Unselected(-1) │   │  tip_per_person │       │
//! │  │  1000 = 10%     │   │  Selected(0..5) │   │  total_per_...  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  TIP_RATES: [0%, 5%, 10%, 15%, 25%, 50%]  (button index → rate)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Tip Rate
// =============================================================================

/// Tip rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000, so every button in the table is an
/// exact integer: 500 bps = 5%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TipRate(u32);

impl TipRate {
    /// Creates a tip rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TipRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tip rate.
    #[inline]
    pub const fn zero() -> Self {
        TipRate(0)
    }
}

impl Default for TipRate {
    fn default() -> Self {
        TipRate::zero()
    }
}

/// The fixed tip buttons, by index.
pub const TIP_RATES: [TipRate; 6] = [
    TipRate::from_bps(0),
    TipRate::from_bps(500),
    TipRate::from_bps(1000),
    TipRate::from_bps(1500),
    TipRate::from_bps(2500),
    TipRate::from_bps(5000),
];

/// Resolves a raw button index to a rate.
///
/// Anything outside `0..=5`, including `-1` for "no tip selected",
/// resolves to 0%.
///
/// ## Example
/// ```rust
/// use tipsplit_core::types::rate_for_index;
///
/// assert_eq!(rate_for_index(2).bps(), 1000);
/// assert_eq!(rate_for_index(-1).bps(), 0);
/// assert_eq!(rate_for_index(42).bps(), 0);
/// ```
pub fn rate_for_index(index: i64) -> TipRate {
    usize::try_from(index)
        .ok()
        .and_then(|i| TIP_RATES.get(i).copied())
        .unwrap_or_default()
}

// =============================================================================
// Tip Selection
// =============================================================================

/// Which tip button is active.
///
/// ## State Machine
/// ```text
///                 select(i)
///   ┌────────────┐ ───────► ┌─────────────┐ ──┐
///   │ Unselected │          │ Selected(i) │   │ select(j): only j active
///   └────────────┘ ◄─────── └─────────────┘ ◄─┘
///                  reset
/// ```
/// There is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case", tag = "state", content = "index")]
pub enum TipSelection {
    /// No button active (index -1).
    #[default]
    Unselected,
    /// Button `0..=5` active.
    Selected(u8),
}

impl TipSelection {
    /// Selects button `index`, replacing any previous selection.
    ///
    /// Indices outside the table are rejected and the state is unchanged.
    pub fn select(&mut self, index: i64) -> CoreResult<()> {
        match u8::try_from(index) {
            Ok(i) if (i as usize) < TIP_RATES.len() => {
                *self = TipSelection::Selected(i);
                Ok(())
            }
            _ => Err(CoreError::InvalidTipIndex {
                index,
                max: TIP_RATES.len() - 1,
            }),
        }
    }

    /// Back to `Unselected`.
    pub fn reset(&mut self) {
        *self = TipSelection::Unselected;
    }

    /// The raw index the view layer uses: `-1` when unselected.
    pub const fn index(&self) -> i64 {
        match self {
            TipSelection::Unselected => -1,
            TipSelection::Selected(i) => *i as i64,
        }
    }

    /// The active rate; 0% when unselected.
    pub fn rate(&self) -> TipRate {
        rate_for_index(self.index())
    }

    /// Whether button `index` should render as active.
    pub fn is_active(&self, index: usize) -> bool {
        matches!(self, TipSelection::Selected(i) if *i as usize == index)
    }
}

// =============================================================================
// Split Result
// =============================================================================

/// The two amounts the widget displays.
///
/// `SplitResult::default()` is the failure-safe `{0.00, 0.00}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SplitResult {
    /// Tip owed by each person.
    pub tip_per_person: Money,
    /// Bill plus tip owed by each person.
    pub total_per_person: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tip_rate_table() {
        let bps: Vec<u32> = TIP_RATES.iter().map(|r| r.bps()).collect();
        assert_eq!(bps, vec![0, 500, 1000, 1500, 2500, 5000]);
        assert!((TIP_RATES[3].percentage() - 15.0).abs() < 0.001);
    }

    #[test]
    fn test_rate_for_index_out_of_range_is_zero() {
        assert_eq!(rate_for_index(-1), TipRate::zero());
        assert_eq!(rate_for_index(6), TipRate::zero());
        assert_eq!(rate_for_index(i64::MIN), TipRate::zero());
        assert_eq!(rate_for_index(5).bps(), 5000);
    }

    #[test]
    fn test_selection_default_is_unselected() {
        let selection = TipSelection::default();
        assert_eq!(selection, TipSelection::Unselected);
        assert_eq!(selection.index(), -1);
        assert_eq!(selection.rate(), TipRate::zero());
    }

    #[test]
    fn test_selecting_replaces_previous_choice() {
        let mut selection = TipSelection::default();
        selection.select(1).unwrap();
        selection.select(4).unwrap();

        assert_eq!(selection, TipSelection::Selected(4));
        assert!(selection.is_active(4));
        assert!((0..6).filter(|i| selection.is_active(*i)).count() == 1);
        assert_eq!(selection.rate().bps(), 2500);
    }

    #[test]
    fn test_invalid_select_leaves_state_unchanged() {
        let mut selection = TipSelection::Selected(2);
        let err = selection.select(6).unwrap_err();

        assert!(matches!(err, CoreError::InvalidTipIndex { index: 6, max: 5 }));
        assert_eq!(selection, TipSelection::Selected(2));
        assert!(selection.select(-1).is_err());
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut selection = TipSelection::Selected(0);
        selection.reset();
        assert_eq!(selection, TipSelection::Unselected);

        selection.reset();
        assert_eq!(selection, TipSelection::Unselected);
    }

    #[test]
    fn test_split_result_serializes_camel_case() {
        let result = SplitResult {
            tip_per_person: Money::from_cents(250),
            total_per_person: Money::from_cents(2750),
        };
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["tipPerPerson"], 250);
        assert_eq!(json["totalPerPerson"], 2750);
    }
}
