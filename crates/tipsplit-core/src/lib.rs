//! # tipsplit-core: Pure Logic for the Tip Calculator
//!
//! This crate is the **heart** of tipsplit. It contains all the logic of the
//! tip calculator widget as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        tipsplit Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              View Layer (browser widget / terminal)             │   │
//! │  │    bill field ──► tip buttons ──► people field ──► "$X.XX"     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ key / tip / people / submit / reset    │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              tipsplit-cli (commands, config, logging)           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tipsplit-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ sanitizer │  │validation │  │calculator │  │  session  │  │   │
//! │  │   │    Key    │  │parse_bill │  │  compute  │  │  Session  │  │   │
//! │  │   │  Buffer   │  │ validity  │  │   _split  │  │   View    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TIMERS • NO GLOBALS • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`sanitizer`] - Keystroke filtering into a numeral buffer
//! - [`validation`] - Bill/people parsing and invalid-input flags
//! - [`calculator`] - The split arithmetic
//! - [`session`] - Session state object tying the pieces together
//! - [`types`] - Tip rates, tip selection, split result
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`animation`] - Cosmetic count-up frames
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Same input = same output
//! 2. **Integer Money**: Results are in cents (i64); the bill keeps every typed digit
//! 3. **Fallbacks, Not Failures**: Bad input yields `$0.00`, never a panic
//!
//! ## Example Usage
//!
//! ```rust
//! use tipsplit_core::sanitizer::Key;
//! use tipsplit_core::Session;
//!
//! let mut session = Session::new();
//! for key in ["1", "0", "0"] {
//!     session.press_key(&Key::parse(key));
//! }
//! session.set_people("4");
//!
//! let view = session.select_tip(2).unwrap(); // 10%
//! assert_eq!(view.split.tip_per_person.to_string(), "$2.50");
//! assert_eq!(view.split.total_per_person.to_string(), "$27.50");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod animation;
pub mod calculator;
pub mod error;
pub mod money;
pub mod sanitizer;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use calculator::compute_split;
pub use error::{CoreError, ValidationError};
pub use money::{BillAmount, Money};
pub use sanitizer::{sanitize, Key};
pub use session::{Session, SessionView};
pub use types::*;
pub use validation::FieldValidity;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Largest whole-dollar part of a bill ($9,999,999,999,999).
///
/// ## Why a limit?
/// Keeps every per-person result inside `i64` cents. Larger bills are
/// reported as invalid input.
pub const MAX_BILL_DOLLARS: u64 = 9_999_999_999_999;
