//! Console implementation for platforms without console input modes

use super::{Console, ConsoleInput};
use std::io;

/// Console that is never available
///
/// Opening it always fails with `Unsupported`, so the guard degrades to a
/// no-op without touching the terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopConsole;

impl NoopConsole {
    /// Create a new `NoopConsole` instance
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Console for NoopConsole {
    fn open_input(&self) -> io::Result<Box<dyn ConsoleInput + '_>> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "console input modes are not available on this platform",
        ))
    }
}
