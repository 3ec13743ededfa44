//! # Split Commands
//!
//! The people field, submit, and the read-only state snapshot.
//!
//! ## Submit Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  submit                                                                 │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  Session::submit() ──► SessionView { split, validity, ... }             │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  SessionResponse: amounts formatted "$X.XX", flags for styling,         │
//! │                   optional count-up frames                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::{debug, info};

use crate::state::{ConfigState, SessionState};
use tipsplit_core::animation::count_up;
use tipsplit_core::{rate_for_index, Money, SessionView, TIP_RATES};

/// One formatted amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountDto {
    /// Display string, e.g. `"$27.50"`
    pub display: String,

    /// Exact value in cents
    pub cents: i64,

    /// Count-up frames ending on `display`; empty when animation is off
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub frames: Vec<String>,
}

impl AmountDto {
    fn new(amount: Money, config: &ConfigState, animate: bool) -> Self {
        let frames = if animate && config.animation_enabled() {
            count_up(amount, config.animation_steps)
                .map(|frame| config.format_currency(frame))
                .collect()
        } else {
            Vec::new()
        };

        AmountDto {
            display: config.format_currency(amount),
            cents: amount.cents(),
            frames,
        }
    }
}

/// Everything the view needs after a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub bill_text: String,
    pub people_text: String,

    /// Active tip button, `-1` when none
    pub tip_index: i64,

    /// One flag per tip button; at most one is true
    pub active_tips: Vec<bool>,

    pub tip_per_person: AmountDto,
    pub total_per_person: AmountDto,

    pub bill_invalid: bool,
    pub people_invalid: bool,
}

impl SessionResponse {
    /// Builds the response from a core snapshot.
    pub fn from_view(view: &SessionView, config: &ConfigState, animate: bool) -> Self {
        SessionResponse {
            bill_text: view.bill_text.clone(),
            people_text: view.people_text.clone(),
            tip_index: view.tip_index,
            active_tips: (0..TIP_RATES.len())
                .map(|i| view.tip_index == i as i64)
                .collect(),
            tip_per_person: AmountDto::new(view.split.tip_per_person, config, animate),
            total_per_person: AmountDto::new(view.split.total_per_person, config, animate),
            bill_invalid: view.validity.bill_invalid,
            people_invalid: view.validity.people_invalid,
        }
    }
}

/// Echo of the people field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeopleResponse {
    pub people_text: String,
}

/// Stores the people field text. Parsing happens on calculation.
pub fn set_people(state: &mut SessionState, text: &str) -> PeopleResponse {
    debug!(people = text, "set_people command");
    state.with_session_mut(|session| session.set_people(text));

    PeopleResponse {
        people_text: text.to_string(),
    }
}

/// Calculates the split and the invalid-input flags.
///
/// Invalid fields are reported through the flags, with a `$0.00` split.
pub fn submit(state: &SessionState, config: &ConfigState) -> SessionResponse {
    let view = state.with_session(|session| session.submit());

    if view.validity.is_valid() {
        info!(
            bill = %view.bill_text,
            people = %view.people_text,
            tip_index = view.tip_index,
            tip_percent = rate_for_index(view.tip_index).percentage(),
            tip_per_person = %view.split.tip_per_person,
            total_per_person = %view.split.total_per_person,
            "Split calculated"
        );
    } else {
        info!(
            bill_invalid = view.validity.bill_invalid,
            people_invalid = view.validity.people_invalid,
            "Submit with invalid input"
        );
    }

    SessionResponse::from_view(&view, config, true)
}

/// Read-only snapshot, without animation frames.
pub fn get_state(state: &SessionState, config: &ConfigState) -> SessionResponse {
    debug!("get_state command");
    let view = state.with_session(|session| session.view());
    SessionResponse::from_view(&view, config, false)
}
