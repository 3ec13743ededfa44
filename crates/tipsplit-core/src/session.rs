//! # Session
//!
//! One calculator session: the bill buffer, the active tip button and the
//! people text, owned by a single value instead of page-level globals.
//!
//! ## Event Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  View Event               Session Method         Effect                 │
//! │  ──────────               ──────────────         ──────                 │
//! │  keydown (bill field) ──► press_key()  ────────► buffer sanitized      │
//! │  input (people field) ──► set_people() ────────► people text stored    │
//! │  click tip button i ────► select_tip(i) ───────► Selected(i) + split   │
//! │  click submit ──────────► submit() ────────────► split + flags         │
//! │  click reset ───────────► reset() ─────────────► everything cleared    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use ts_rs::TS;

use crate::calculator::compute_split_at_rate;
use crate::error::CoreResult;
use crate::sanitizer::{Key, NumeralBuffer};
use crate::types::{SplitResult, TipSelection};
use crate::validation::FieldValidity;

/// Everything the view layer needs to render the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    /// Sanitized bill text, for echo.
    pub bill_text: String,
    /// People field text as last set.
    pub people_text: String,
    /// Active tip button, `-1` when none.
    pub tip_index: i64,
    /// Split for the current inputs.
    pub split: SplitResult,
    /// Invalid-input flags for styling.
    pub validity: FieldValidity,
}

/// A calculator session.
///
/// Reset returns every field to its initial value in one call.
#[derive(Debug, Clone, Default)]
pub struct Session {
    buffer: NumeralBuffer,
    selection: TipSelection,
    people_text: String,
}

impl Session {
    /// Creates a fresh session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a keystroke from the bill field. Returns the buffer for echo.
    ///
    /// ## Example
    /// ```rust
    /// use tipsplit_core::sanitizer::Key;
    /// use tipsplit_core::session::Session;
    ///
    /// let mut session = Session::new();
    /// session.press_key(&Key::parse("4"));
    /// session.press_key(&Key::parse("."));
    /// assert_eq!(session.press_key(&Key::parse(".")), "4.");
    /// ```
    pub fn press_key(&mut self, key: &Key) -> &str {
        self.buffer.push_key(key);
        self.buffer.as_str()
    }

    /// Feeds each character of `text` as a keystroke.
    pub fn type_text(&mut self, text: &str) -> &str {
        self.buffer.push_str(text);
        self.buffer.as_str()
    }

    /// Stores the people field text as-is. It is parsed on calculation.
    pub fn set_people(&mut self, text: impl Into<String>) {
        self.people_text = text.into();
    }

    /// Activates tip button `index` and recalculates.
    ///
    /// An index outside `0..=5` is rejected and nothing changes.
    pub fn select_tip(&mut self, index: i64) -> CoreResult<SessionView> {
        self.selection.select(index)?;
        Ok(self.view())
    }

    /// Recalculates with the current inputs.
    pub fn submit(&self) -> SessionView {
        self.view()
    }

    /// Clears the buffer, the selection and the people text.
    pub fn reset(&mut self) {
        *self = Session::default();
    }

    /// The current split. `{0.00, 0.00}` while any input is invalid.
    pub fn split(&self) -> SplitResult {
        compute_split_at_rate(self.buffer.as_str(), &self.people_text, self.selection.rate())
    }

    /// Current invalid-input flags.
    pub fn validity(&self) -> FieldValidity {
        FieldValidity::check(self.buffer.as_str(), &self.people_text)
    }

    /// Snapshot of the whole session.
    pub fn view(&self) -> SessionView {
        SessionView {
            bill_text: self.buffer.as_str().to_string(),
            people_text: self.people_text.clone(),
            tip_index: self.selection.index(),
            split: self.split(),
            validity: self.validity(),
        }
    }

    pub fn bill_text(&self) -> &str {
        self.buffer.as_str()
    }

    pub fn people_text(&self) -> &str {
        &self.people_text
    }

    pub fn selection(&self) -> TipSelection {
        self.selection
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::money::Money;

    fn typed(bill: &str, people: &str) -> Session {
        let mut session = Session::new();
        session.type_text(bill);
        session.set_people(people);
        session
    }

    #[test]
    fn test_new_session_is_empty() {
        let view = Session::new().view();
        assert_eq!(view.bill_text, "");
        assert_eq!(view.people_text, "");
        assert_eq!(view.tip_index, -1);
        assert_eq!(view.split, SplitResult::default());
        assert!(view.validity.bill_invalid);
        assert!(view.validity.people_invalid);
    }

    #[test]
    fn test_select_tip_recalculates() {
        let mut session = typed("100", "4");
        let view = session.select_tip(2).unwrap();

        assert_eq!(view.tip_index, 2);
        assert_eq!(view.split.tip_per_person, Money::from_cents(250));
        assert_eq!(view.split.total_per_person, Money::from_cents(2750));
        assert!(view.validity.is_valid());
    }

    #[test]
    fn test_switching_tip_keeps_one_selection() {
        let mut session = typed("100", "4");
        session.select_tip(1).unwrap();
        let view = session.select_tip(5).unwrap();

        assert_eq!(view.tip_index, 5);
        assert!(session.selection().is_active(5));
        assert!(!session.selection().is_active(1));
        assert_eq!(view.split.tip_per_person, Money::from_cents(1250));
    }

    #[test]
    fn test_invalid_tip_index_is_rejected() {
        let mut session = typed("100", "4");
        session.select_tip(3).unwrap();

        let err = session.select_tip(9).unwrap_err();
        assert!(matches!(err, CoreError::InvalidTipIndex { index: 9, .. }));
        assert_eq!(session.selection().index(), 3);
    }

    #[test]
    fn test_submit_without_tip_is_zero_percent() {
        let view = typed("100", "4").submit();
        assert_eq!(view.tip_index, -1);
        assert_eq!(view.split.tip_per_person, Money::zero());
        assert_eq!(view.split.total_per_person, Money::from_cents(2500));
    }

    #[test]
    fn test_submit_flags_invalid_people_but_still_answers() {
        let mut session = typed("50", "0");
        session.select_tip(3).unwrap();
        let view = session.submit();

        assert!(!view.validity.bill_invalid);
        assert!(view.validity.people_invalid);
        assert_eq!(view.split, SplitResult::default());
    }

    #[test]
    fn test_keys_are_sanitized() {
        let mut session = Session::new();
        for name in ["1", "x", "2", ".", ".", "5", "Backspace", "7"] {
            session.press_key(&Key::parse(name));
        }
        assert_eq!(session.bill_text(), "12.7");
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = typed("100", "4");
        session.select_tip(4).unwrap();
        session.reset();

        assert_eq!(session.bill_text(), "");
        assert_eq!(session.people_text(), "");
        assert_eq!(session.selection(), TipSelection::Unselected);
    }

    #[test]
    fn test_submit_does_not_mutate() {
        let mut session = typed("123.45", "3");
        session.select_tip(2).unwrap();

        let first = session.submit();
        let second = session.submit();
        assert_eq!(first, second);
    }
}
