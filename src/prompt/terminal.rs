//! Raw mode, redraws and key reading on the controlling terminal

use crate::error::GumError;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, queue};
use std::io::{self, Write};
use std::time::Instant;
use tracing::debug;

/// Raw mode for the lifetime of the guard
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn enable() -> Result<Self, GumError> {
        terminal::enable_raw_mode()
            .map_err(|e| GumError::terminal(format!("could not enable raw mode: {e}")))?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(err) = terminal::disable_raw_mode() {
            debug!("failed to disable raw mode: {err}");
        }
    }
}

/// Redrawable region at the bottom of a writer
pub struct Screen<W: Write> {
    out: W,
    drawn: usize,
}

impl Screen<io::Stderr> {
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> Screen<W> {
    pub const fn new(out: W) -> Self {
        Self { out, drawn: 0 }
    }

    /// Replace the previous frame with `lines`
    pub fn draw(&mut self, lines: &[String]) -> Result<(), GumError> {
        self.erase()?;
        // Raw mode: a bare \n does not return the carriage.
        write!(self.out, "{}", lines.join("\r\n"))?;
        self.drawn = lines.len();
        self.out.flush()?;
        Ok(())
    }

    /// Erase the current frame
    pub fn clear(&mut self) -> Result<(), GumError> {
        self.erase()?;
        self.out.flush()?;
        Ok(())
    }

    fn erase(&mut self) -> io::Result<()> {
        if self.drawn == 0 {
            return Ok(());
        }
        if let Ok(up @ 1..) = u16::try_from(self.drawn - 1) {
            queue!(self.out, cursor::MoveUp(up))?;
        }
        queue!(
            self.out,
            cursor::MoveToColumn(0),
            terminal::Clear(ClearType::FromCursorDown)
        )?;
        self.drawn = 0;
        Ok(())
    }
}

/// Block until a key is pressed or `deadline` passes
pub fn next_key(deadline: Option<Instant>) -> Result<KeyEvent, GumError> {
    loop {
        if let Some(deadline) = deadline {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() || !event::poll(remaining)? {
                return Err(GumError::Timeout);
            }
        }
        // Windows also reports releases; only presses drive prompts.
        if let Event::Key(key) = event::read()?
            && key.kind != KeyEventKind::Release
        {
            return Ok(key);
        }
    }
}
