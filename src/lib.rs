//! `gum` - A tool for glamorous shell scripts
//!
//! This library provides the sub-commands behind the `gum` binary (styled
//! text, option pickers, confirmations and text input), the mapping from
//! their results to process exit statuses, and the console input mode guard
//! that keeps Windows hosts usable after a prompt has run.

pub mod cli;
pub mod console;
pub mod error;
pub mod operations;
pub mod prompt;
pub mod style;
pub mod utils;
pub mod version;

use clap::{CommandFactory as _, FromArgMatches as _};
use cli::Cli;
use error::GumError;
use std::ffi::OsString;
use std::io::{self, Write};
use tracing::debug;
use version::VersionInfo;

/// How a sub-command ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExitOutcome {
    Success,
    /// The user cancelled an interactive prompt
    Aborted,
    /// Anything else; `message` is printed when non-empty
    Failed { message: String, status: u8 },
}

impl ExitOutcome {
    /// Generic failure with exit status 1
    pub fn failed<S: Into<String>>(message: S) -> Self {
        Self::Failed {
            message: message.into(),
            status: 1,
        }
    }

    /// Classify the result of a sub-command
    #[must_use]
    pub fn from_result(result: anyhow::Result<()>) -> Self {
        let Err(err) = result else {
            return Self::Success;
        };
        match err.downcast_ref::<GumError>() {
            Some(GumError::Aborted) => Self::Aborted,
            Some(gum_err) => Self::Failed {
                message: gum_err.to_string(),
                status: gum_err.exit_code(),
            },
            None => Self::failed(format!("{err:#}")),
        }
    }

    /// Process exit status for this outcome
    #[must_use]
    pub const fn exit_status(&self) -> u8 {
        match *self {
            Self::Success => 0,
            Self::Aborted => error::STATUS_ABORTED,
            Self::Failed { status, .. } => status,
        }
    }

    /// Print the failure message, if any, and return the exit status
    ///
    /// Aborts are silent.
    pub fn report<W: Write>(&self, out: &mut W) -> io::Result<u8> {
        if let Self::Failed { message, .. } = self
            && !message.is_empty()
        {
            writeln!(out, "{message}")?;
            out.flush()?;
        }
        Ok(self.exit_status())
    }
}

/// Tool description shown in `--help`, with "glamorous" in the accent color
#[must_use]
pub fn description() -> String {
    format!("A tool for {} shell scripts.", style::accent("glamorous"))
}

/// Full command schema with the resolved version and styled description
#[must_use]
pub fn command(version: &VersionInfo) -> clap::Command {
    Cli::command()
        .version(version.to_string())
        .about(description())
}

/// Parse `args`, run the selected sub-command and return the exit status
///
/// Parse errors, `--help` and `--version` are reported through clap and
/// return clap's own status. The console mode guard is the caller's.
pub fn run<I, T>(args: I, version: &VersionInfo) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut cmd = command(version);
    let cli = match cmd
        .try_get_matches_from_mut(args)
        .and_then(|matches| Cli::from_arg_matches(&matches))
    {
        Ok(cli) => cli,
        Err(err) => {
            let err = err.format(&mut cmd);
            if let Err(print_err) = err.print() {
                debug!("failed to print usage error: {print_err}");
            }
            return u8::try_from(err.exit_code()).unwrap_or(1);
        }
    };

    let outcome = ExitOutcome::from_result(cli::execute(&cli.command));
    debug!(?outcome, "sub-command finished");
    outcome
        .report(&mut io::stdout())
        .unwrap_or_else(|_| outcome.exit_status())
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;

    #[test]
    fn test_success_is_silent_zero() {
        let mut out = Vec::new();
        assert_eq!(ExitOutcome::Success.report(&mut out).unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_aborted_is_silent_reserved_status() {
        let mut out = Vec::new();
        let outcome = ExitOutcome::from_result(Err(GumError::Aborted.into()));
        assert_eq!(outcome, ExitOutcome::Aborted);
        assert_eq!(outcome.report(&mut out).unwrap(), 130);
        assert!(out.is_empty());
    }

    #[test]
    fn test_failure_prints_message_and_exits_one() {
        let mut out = Vec::new();
        let outcome = ExitOutcome::from_result(Err(anyhow::anyhow!("boom")));
        assert_eq!(outcome, ExitOutcome::failed("boom"));
        assert_eq!(outcome.report(&mut out).unwrap(), 1);
        assert_eq!(String::from_utf8(out).unwrap(), "boom\n");
    }

    #[test]
    fn test_declined_exits_one_without_message() {
        let mut out = Vec::new();
        let outcome = ExitOutcome::from_result(Err(GumError::Declined.into()));
        assert_eq!(outcome.report(&mut out).unwrap(), 1);
        assert!(out.is_empty());
    }

    #[test]
    fn test_timeout_keeps_reserved_status() {
        let outcome = ExitOutcome::from_result(Err(GumError::Timeout.into()));
        assert_eq!(outcome.exit_status(), 124);
    }

    #[test]
    fn test_description_mentions_glamorous() {
        assert!(description().contains("glamorous"));
        assert!(description().starts_with("A tool for "));
    }

    #[test]
    fn test_parse_error_returns_usage_status() {
        let version = VersionInfo::resolve(Some("1.0.0"), None, None);
        assert_eq!(run(["gum", "--definitely-not-a-flag"], &version), 2);
    }
}
