//! # State Module
//!
//! Application state for the tipsplit CLI.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────┬──────────────────┐                       │
//! │          ▼                                     ▼                        │
//! │  ┌──────────────────┐                 ┌──────────────────┐              │
//! │  │  SessionState    │                 │   ConfigState    │              │
//! │  │                  │                 │                  │              │
//! │  │  Session         │                 │  currency symbol │              │
//! │  │  (buffer, tip,   │                 │  animation steps │              │
//! │  │   people text)   │                 │                  │              │
//! │  └──────────────────┘                 └──────────────────┘              │
//! │                                                                         │
//! │  • SessionState: mutated by commands, one at a time                    │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::{ConfigError, ConfigState};
pub use session::SessionState;
