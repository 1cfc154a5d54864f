//! Custom error types with exit codes

use thiserror::Error;

/// Exit status reserved for a user-initiated abort (ctrl+c, esc)
pub const STATUS_ABORTED: u8 = 130;

/// Exit status reserved for a prompt that ran out of time
pub const STATUS_TIMEOUT: u8 = 124;

/// Main error type for gum operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GumError {
    /// The user cancelled an interactive prompt
    #[error("user aborted")]
    Aborted,

    /// An interactive prompt exceeded its `--timeout`
    #[error("timeout")]
    Timeout,

    /// The user answered "no" to a confirmation; reported without a message
    #[error("")]
    Declined,

    /// Invalid Argument - a flag value or input could not be used
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Terminal Error - raw mode or event reading failed
    #[error("terminal error: {message}")]
    Terminal { message: String },

    /// I/O Error - reading stdin or writing output failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GumError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> u8 {
        match *self {
            Self::Aborted => STATUS_ABORTED,
            Self::Timeout => STATUS_TIMEOUT,
            Self::Declined | Self::InvalidArgument { .. } | Self::Terminal { .. } | Self::Io(_) => {
                1
            }
        }
    }

    /// Create an invalid argument error
    #[inline]
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a terminal error
    #[inline]
    pub fn terminal<S: Into<String>>(message: S) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }
}
