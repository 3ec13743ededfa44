//! # Tip Commands
//!
//! Tip button clicks. Selecting a button recalculates immediately.

use tracing::{debug, warn};

use crate::commands::split::SessionResponse;
use crate::error::ApiError;
use crate::state::{ConfigState, SessionState};

/// Activates tip button `index` (0-5) and returns the recalculated session.
///
/// ## Errors
/// `INVALID_TIP` when `index` is not a button; the previous selection stays.
pub fn select_tip(
    state: &mut SessionState,
    config: &ConfigState,
    index: i64,
) -> Result<SessionResponse, ApiError> {
    debug!(index, "select_tip command");

    let view = state
        .try_with_session_mut(|session| session.select_tip(index))
        .map_err(|e| {
            warn!(index, "Rejected tip selection");
            ApiError::from(e)
        })?;

    Ok(SessionResponse::from_view(&view, config, false))
}
