//! Interactive prompt plumbing
//!
//! A prompt is a pure state machine ([`Prompt`]) driven by key events. The
//! terminal side (raw mode, redraws on stderr, timeouts) lives in
//! [`terminal`] so the key handling can be tested without a TTY.

pub mod terminal;

use crate::error::GumError;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;
use terminal::{RawModeGuard, Screen, next_key};
use tracing::debug;

/// Result of feeding one key to a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<T> {
    Continue,
    Submit(T),
    Abort,
}

/// Interactive prompt state machine
pub trait Prompt {
    type Output;

    /// Current frame, one entry per line
    fn view(&self) -> Vec<String>;

    /// Advance the state by one key press
    fn handle_key(&mut self, key: KeyEvent) -> Step<Self::Output>;
}

/// Whether `key` cancels the prompt (esc or ctrl+c)
#[must_use]
pub fn is_abort_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Run `prompt` on the terminal until it submits, aborts or times out
///
/// The frame is erased before returning on every path.
pub fn run<P: Prompt>(mut prompt: P, timeout: Option<Duration>) -> Result<P::Output, GumError> {
    let _raw = RawModeGuard::enable()?;
    let mut screen = Screen::stderr();
    let deadline = timeout.map(|t| std::time::Instant::now() + t);

    let result = loop {
        if let Err(err) = screen.draw(&prompt.view()) {
            break Err(err);
        }
        let key = match next_key(deadline) {
            Ok(key) => key,
            Err(err) => break Err(err),
        };
        match prompt.handle_key(key) {
            Step::Continue => {}
            Step::Submit(output) => break Ok(output),
            Step::Abort => break Err(GumError::Aborted),
        }
    };

    if let Err(err) = screen.clear() {
        debug!("failed to clear prompt: {err}");
    }
    result
}
