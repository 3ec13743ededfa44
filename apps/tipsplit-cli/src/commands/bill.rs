//! # Bill Commands
//!
//! Keystrokes for the bill field.
//!
//! ```text
//! key 1 ──► "1"
//! key . ──► "1."
//! key . ──► "1."     accepted: false
//! key Backspace ──► "1"
//! ```

use serde::Serialize;
use tracing::debug;

use crate::state::SessionState;
use tipsplit_core::Key;

/// Echo of the bill buffer after a keystroke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillResponse {
    /// Sanitized buffer to display in the bill field
    pub bill_text: String,

    /// Whether the key(s) changed the buffer
    pub accepted: bool,
}

/// Applies one key from the bill field.
///
/// Never fails: rejected keys simply leave the buffer as it was.
pub fn press_key(state: &mut SessionState, key_name: &str) -> BillResponse {
    let key = Key::parse(key_name);

    let (before, after) = state.with_session_mut(|session| {
        let before = session.bill_text().to_string();
        let after = session.press_key(&key).to_string();
        (before, after)
    });

    debug!(?key, bill = %after, "press_key command");

    BillResponse {
        accepted: before != after,
        bill_text: after,
    }
}

/// Types every character of `text` into the bill field.
pub fn type_text(state: &mut SessionState, text: &str) -> BillResponse {
    let (before, after) = state.with_session_mut(|session| {
        let before = session.bill_text().to_string();
        let after = session.type_text(text).to_string();
        (before, after)
    });

    debug!(text, bill = %after, "type_text command");

    BillResponse {
        accepted: before != after,
        bill_text: after,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_key_echoes_buffer() {
        let mut state = SessionState::new();
        press_key(&mut state, "4");
        let response = press_key(&mut state, "2");

        assert_eq!(response.bill_text, "42");
        assert!(response.accepted);
    }

    #[test]
    fn test_second_point_is_not_accepted() {
        let mut state = SessionState::new();
        press_key(&mut state, ".");
        let response = press_key(&mut state, ".");

        assert_eq!(response.bill_text, ".");
        assert!(!response.accepted);
    }

    #[test]
    fn test_backspace_on_empty_is_not_accepted() {
        let mut state = SessionState::new();
        let response = press_key(&mut state, "Backspace");

        assert_eq!(response.bill_text, "");
        assert!(!response.accepted);
    }

    #[test]
    fn test_type_text_filters() {
        let mut state = SessionState::new();
        let response = type_text(&mut state, "$12.50");

        assert_eq!(response.bill_text, "12.50");
        assert!(response.accepted);
    }
}
