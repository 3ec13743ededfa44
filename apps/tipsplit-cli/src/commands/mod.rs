//! # Commands Module
//!
//! All commands exposed over the line protocol.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (parsing + dispatch)
//! ├── bill.rs     ◄─── key, type
//! ├── tip.rs      ◄─── tip
//! ├── split.rs    ◄─── people, submit, state
//! └── session.rs  ◄─── reset
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  stdin: "tip 2"                                                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  "tip 2".parse::<Command>() ──► Command::Tip(2)                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  dispatch(&mut SessionState, &ConfigState, Command::Tip(2))             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  tip::select_tip(...) -> Result<SessionResponse, ApiError>              │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  stdout: {"ok":true,"data":{"tipIndex":2,...}}                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod bill;
pub mod session;
pub mod split;
pub mod tip;

use std::str::FromStr;

use serde::Serialize;

use crate::error::ApiError;
use crate::state::{ConfigState, SessionState};

use bill::BillResponse;
use split::{PeopleResponse, SessionResponse};

/// One parsed protocol line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `key <name>`
    Key(String),
    /// `type <text>`
    Type(String),
    /// `people <text>` (text may be empty)
    People(String),
    /// `tip <index>`
    Tip(i64),
    Submit,
    Reset,
    State,
    Quit,
}

impl FromStr for Command {
    type Err = ApiError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        let required = |what: &str| {
            if rest.is_empty() {
                Err(ApiError::invalid_argument(format!("{} needs {}", name, what)))
            } else {
                Ok(rest.to_string())
            }
        };

        match name {
            "key" => required("a key name").map(Command::Key),
            "type" => required("some text").map(Command::Type),
            "people" => Ok(Command::People(rest.to_string())),
            "tip" => {
                let index = required("an index")?;
                index.parse().map(Command::Tip).map_err(|_| {
                    ApiError::invalid_argument(format!("tip index must be an integer, got {}", index))
                })
            }
            "submit" => Ok(Command::Submit),
            "reset" => Ok(Command::Reset),
            "state" => Ok(Command::State),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(ApiError::unknown_command(other)),
        }
    }
}

/// Successful command payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    Bill(BillResponse),
    People(PeopleResponse),
    Session(SessionResponse),
}

/// Runs a command. `Ok(None)` means the client asked to quit.
pub fn dispatch(
    state: &mut SessionState,
    config: &ConfigState,
    command: Command,
) -> Result<Option<Reply>, ApiError> {
    let reply = match command {
        Command::Key(name) => Reply::Bill(bill::press_key(state, &name)),
        Command::Type(text) => Reply::Bill(bill::type_text(state, &text)),
        Command::People(text) => Reply::People(split::set_people(state, &text)),
        Command::Tip(index) => Reply::Session(tip::select_tip(state, config, index)?),
        Command::Submit => Reply::Session(split::submit(state, config)),
        Command::Reset => Reply::Session(session::reset(state, config)),
        Command::State => Reply::Session(split::get_state(state, config)),
        Command::Quit => return Ok(None),
    };

    Ok(Some(reply))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_parse_commands() {
        assert_eq!("key 5".parse::<Command>().unwrap(), Command::Key("5".to_string()));
        assert_eq!(
            "key Backspace".parse::<Command>().unwrap(),
            Command::Key("Backspace".to_string())
        );
        assert_eq!(
            "type 12.50".parse::<Command>().unwrap(),
            Command::Type("12.50".to_string())
        );
        assert_eq!("people".parse::<Command>().unwrap(), Command::People(String::new()));
        assert_eq!(
            "people  4 ".parse::<Command>().unwrap(),
            Command::People("4".to_string())
        );
        assert_eq!("tip -1".parse::<Command>().unwrap(), Command::Tip(-1));
        assert_eq!("  submit  ".parse::<Command>().unwrap(), Command::Submit);
        assert_eq!("exit".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "tipp 2".parse::<Command>().unwrap_err().code,
            ErrorCode::UnknownCommand
        );
        assert_eq!(
            "tip two".parse::<Command>().unwrap_err().code,
            ErrorCode::InvalidArgument
        );
        assert_eq!("tip".parse::<Command>().unwrap_err().code, ErrorCode::InvalidArgument);
        assert_eq!("key".parse::<Command>().unwrap_err().code, ErrorCode::InvalidArgument);
    }

    #[test]
    fn test_dispatch_quit() {
        let mut state = SessionState::new();
        let reply = dispatch(&mut state, &ConfigState::default(), Command::Quit).unwrap();
        assert!(reply.is_none());
    }

    #[test]
    fn test_dispatch_full_flow() {
        let mut state = SessionState::new();
        let config = ConfigState::default();

        for line in ["type 100", "people 4", "tip 2"] {
            dispatch(&mut state, &config, line.parse().unwrap()).unwrap();
        }

        match dispatch(&mut state, &config, Command::Submit).unwrap() {
            Some(Reply::Session(response)) => {
                assert_eq!(response.tip_per_person.display, "$2.50");
                assert_eq!(response.total_per_person.display, "$27.50");
            }
            other => panic!("unexpected reply: {other:?}"),
        }
    }
}
