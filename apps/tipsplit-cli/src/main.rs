//! # tipsplit Entry Point
//!
//! ## Usage
//! ```bash
//! printf 'type 100\npeople 4\ntip 2\nsubmit\n' | tipsplit
//!
//! # With count-up frames and debug logs
//! TIPSPLIT_ANIMATION_STEPS=5 RUST_LOG=debug tipsplit
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match tipsplit_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tipsplit: {}", e);
            ExitCode::FAILURE
        }
    }
}
