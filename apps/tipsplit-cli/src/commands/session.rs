//! # Session Commands
//!
//! Reset: back to an empty bill, no tip, empty people field.

use tracing::info;

use crate::commands::split::SessionResponse;
use crate::state::{ConfigState, SessionState};

/// Clears the whole session and returns the empty snapshot.
pub fn reset(state: &mut SessionState, config: &ConfigState) -> SessionResponse {
    state.with_session_mut(|session| session.reset());
    info!(events = state.events(), "Session reset");

    let view = state.with_session(|session| session.view());
    SessionResponse::from_view(&view, config, false)
}
