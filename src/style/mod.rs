//! Text styling built on `crossterm::style`
//!
//! Colors, CSS-like spacing and the block renderer used by `gum style` and
//! the prompt commands.

pub mod ansi;
pub mod color;
pub mod render;
pub mod spacing;

pub use color::{parse_color, paint};
pub use render::{Align, Style, display_width};
pub use spacing::Spacing;

use crossterm::style::{Color, Stylize as _, style};

/// ANSI-256 pink used for gum's accents
pub const ACCENT: Color = Color::AnsiValue(212);

/// Render `text` in the accent color
#[must_use]
pub fn accent(text: &str) -> String {
    style(text).with(ACCENT).to_string()
}
