//! # gum
//!
//! `gum` is a tool for glamorous shell scripts: styled text, option pickers,
//! confirmations and text input that compose with ordinary shell pipelines.
//!
//! ## Usage
//!
//! ```sh
//! gum style --foreground 212 --padding "1 2" "Hello, there!"
//! TYPE=$(gum choose fix feat docs)
//! gum confirm "Commit changes?" && git commit -m "$(gum input --placeholder summary)"
//! ```
//!
//! ## Exit status
//! - `0`: success (or "yes" for `confirm`)
//! - `1`: failure, with the message printed on stdout (or "no" for `confirm`)
//! - `2`: invalid arguments
//! - `124`: a prompt's `--timeout` expired
//! - `130`: the user aborted a prompt with esc or ctrl+c
//!
//! Logging goes to stderr and is controlled by `GUM_LOG` (default `warn`).

use gum::console::{ConsoleModeGuard, PlatformConsole};
use gum::version::VersionInfo;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    // Held until every exit path below has produced its status.
    let console_guard = ConsoleModeGuard::acquire(PlatformConsole::new());

    let filter = EnvFilter::try_from_env("GUM_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let version = VersionInfo::from_build();
    let status = gum::run(std::env::args_os(), &version);

    drop(console_guard);
    ExitCode::from(status)
}
