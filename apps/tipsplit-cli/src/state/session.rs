//! # Session State
//!
//! Holds the one calculator session the process serves.
//!
//! ## Ownership
//! The protocol loop is single-threaded and each command runs to completion
//! before the next line is read, so the state is owned by the loop and lent
//! to commands. No mutex.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Protocol Line       Command              Session Change                │
//! │  ─────────────       ───────              ──────────────                │
//! │  key 5 ────────────► press_key() ───────► buffer sanitized             │
//! │  people 4 ─────────► set_people() ──────► people text stored           │
//! │  tip 2 ────────────► select_tip() ──────► Selected(2)                  │
//! │  submit ───────────► submit() ──────────► (read only)                  │
//! │  reset ────────────► reset() ───────────► Session::default()           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tipsplit_core::Session;

/// The session plus a count of processed events, for logging.
#[derive(Debug, Default)]
pub struct SessionState {
    session: Session,
    events: u64,
}

impl SessionState {
    /// Creates a fresh session state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the session.
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        f(&self.session)
    }

    /// Executes a function with write access to the session.
    pub fn with_session_mut<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        self.events += 1;
        f(&mut self.session)
    }

    /// Executes a fallible mutation, counting the event only when it succeeds.
    pub fn try_with_session_mut<F, T, E>(&mut self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Session) -> Result<T, E>,
    {
        let result = f(&mut self.session);
        if result.is_ok() {
            self.events += 1;
        }
        result
    }

    /// Number of mutating events handled so far.
    pub fn events(&self) -> u64 {
        self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tipsplit_core::Key;

    #[test]
    fn test_mutations_are_counted() {
        let mut state = SessionState::new();
        state.with_session_mut(|s| s.press_key(&Key::parse("1")).to_string());
        state.with_session_mut(|s| s.set_people("2"));

        assert_eq!(state.events(), 2);
        assert_eq!(state.with_session(|s| s.bill_text().to_string()), "1");
    }

    #[test]
    fn test_failed_mutations_are_not_counted() {
        let mut state = SessionState::new();
        assert!(state.try_with_session_mut(|s| s.select_tip(9)).is_err());
        assert_eq!(state.events(), 0);

        assert!(state.try_with_session_mut(|s| s.select_tip(3)).is_ok());
        assert_eq!(state.events(), 1);
    }

    #[test]
    fn test_reads_are_not_counted() {
        let state = SessionState::new();
        state.with_session(|s| s.view());
        assert_eq!(state.events(), 0);
    }
}
