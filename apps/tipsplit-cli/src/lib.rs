//! # tipsplit CLI Library
//!
//! Drives a calculator session over a line protocol: one command per line
//! on stdin, one JSON object per line on stdout. Logs go to stderr.
//!
//! ## Module Organization
//! ```text
//! tipsplit_cli/
//! ├── lib.rs          ◄─── You are here (setup, protocol loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── session.rs  ◄─── Session state
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command parsing + dispatch
//! │   ├── bill.rs     ◄─── Bill keystrokes
//! │   ├── tip.rs      ◄─── Tip buttons
//! │   ├── split.rs    ◄─── People, submit, state
//! │   └── session.rs  ◄─── Reset
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Example Session
//! ```text
//! > type 100            {"ok":true,"data":{"billText":"100","accepted":true}}
//! > people 4            {"ok":true,"data":{"peopleText":"4"}}
//! > tip 2               {"ok":true,"data":{"tipIndex":2,...,"totalPerPerson":{"display":"$27.50",...}}}
//! > tip 9               {"ok":false,"error":{"code":"INVALID_TIP","message":"..."}}
//! > quit
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::io::{self, BufRead, Write};

use serde::Serialize;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use commands::{dispatch, Command, Reply};
use error::ApiError;
use state::{ConfigState, SessionState};

/// One line of protocol output.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Reply>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

impl Envelope {
    fn success(reply: Reply) -> Self {
        Envelope {
            ok: true,
            data: Some(reply),
            error: None,
        }
    }

    fn failure(err: ApiError) -> Self {
        Envelope {
            ok: false,
            data: None,
            error: Some(err),
        }
    }
}

/// Runs the CLI against the process's stdin and stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging ─────► stderr, RUST_LOG or info,tipsplit_cli=debug│
/// │  2. Load Configuration ─────► TIPSPLIT_* environment variables          │
/// │  3. Create Session State ───► empty bill, no tip, empty people          │
/// │  4. Serve ──────────────────► until EOF or `quit`                       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting tipsplit");

    let config = ConfigState::from_env()?;
    info!(
        currency = %config.currency_symbol,
        animation_steps = config.animation_steps,
        "Configuration loaded"
    );

    let mut state = SessionState::new();
    let stdin = io::stdin();
    let stdout = io::stdout();

    serve(stdin.lock(), stdout.lock(), &mut state, &config)?;

    info!(events = state.events(), "tipsplit finished");
    Ok(())
}

/// Reads commands from `input` and writes one response line per command.
///
/// Blank lines and `#` comments are skipped. Stops at EOF or `quit`.
pub fn serve<R, W>(
    input: R,
    mut output: W,
    state: &mut SessionState,
    config: &ConfigState,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let outcome = trimmed
            .parse::<Command>()
            .and_then(|command| dispatch(state, config, command));

        let envelope = match outcome {
            Ok(Some(reply)) => Envelope::success(reply),
            Ok(None) => {
                debug!("Quit requested");
                break;
            }
            Err(err) => {
                warn!(line = trimmed, code = ?err.code, "Command failed");
                Envelope::failure(err)
            }
        };

        let json = serde_json::to_string(&envelope).unwrap_or_else(|e| {
            error!("Failed to serialize response: {}", e);
            let fallback = Envelope::failure(ApiError::internal("Failed to serialize response"));
            serde_json::to_string(&fallback).unwrap_or_default()
        });
        writeln!(output, "{}", json)?;
        output.flush()?;
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tipsplit_cli=trace` - Show trace for this crate only
/// - Default: INFO, DEBUG for tipsplit crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tipsplit_cli=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str, config: &ConfigState) -> Vec<serde_json::Value> {
        let mut state = SessionState::new();
        let mut output = Vec::new();
        serve(script.as_bytes(), &mut output, &mut state, config).unwrap();

        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_serve_full_session() {
        let script = "type 100\npeople 4\ntip 2\nsubmit\n";
        let lines = run_script(script, &ConfigState::default());

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0]["data"]["billText"], "100");
        assert_eq!(lines[1]["data"]["peopleText"], "4");
        assert_eq!(lines[2]["data"]["tipIndex"], 2);

        let submit = &lines[3];
        assert_eq!(submit["ok"], true);
        assert_eq!(submit["data"]["tipPerPerson"]["display"], "$2.50");
        assert_eq!(submit["data"]["totalPerPerson"]["display"], "$27.50");
        assert_eq!(submit["data"]["billInvalid"], false);
        assert!(submit.get("error").is_none());
    }

    #[test]
    fn test_serve_skips_blank_and_comment_lines() {
        let lines = run_script("\n# comment\n   \nstate\n", &ConfigState::default());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["data"]["tipIndex"], -1);
    }

    #[test]
    fn test_serve_reports_errors_and_continues() {
        let lines = run_script("bogus\ntip 7\nkey 5\n", &ConfigState::default());

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["ok"], false);
        assert_eq!(lines[0]["error"]["code"], "UNKNOWN_COMMAND");
        assert_eq!(lines[1]["error"]["code"], "INVALID_TIP");
        assert_eq!(lines[2]["data"]["billText"], "5");
    }

    #[test]
    fn test_serve_stops_at_quit() {
        let lines = run_script("key 1\nquit\nkey 2\n", &ConfigState::default());
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_serve_invalid_input_is_not_an_error() {
        let lines = run_script("type abc\npeople 0\nsubmit\n", &ConfigState::default());
        let submit = &lines[2];

        assert_eq!(submit["ok"], true);
        assert_eq!(submit["data"]["billInvalid"], true);
        assert_eq!(submit["data"]["peopleInvalid"], true);
        assert_eq!(submit["data"]["totalPerPerson"]["display"], "$0.00");
    }

    #[test]
    fn test_serve_sub_cent_bill() {
        let lines = run_script("type 10.005\npeople 1\ntip 5\n", &ConfigState::default());
        let tip = &lines[2]["data"];

        assert_eq!(tip["tipPerPerson"]["display"], "$5.00");
        assert_eq!(tip["totalPerPerson"]["display"], "$15.01");
        assert_eq!(tip["billInvalid"], false);
    }

    #[test]
    fn test_serve_reset() {
        let lines = run_script("type 50\ntip 1\nreset\n", &ConfigState::default());
        let reset = &lines[2]["data"];

        assert_eq!(reset["billText"], "");
        assert_eq!(reset["tipIndex"], -1);
    }
}
