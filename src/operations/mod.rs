//! Sub-command implementations
//!
//! `style` renders text; `choose`, `confirm` and `input` are interactive
//! prompts that draw on stderr and print their result on stdout.

pub mod choose;
pub mod confirm;
pub mod input;
pub mod style;

pub use choose::*;
pub use confirm::*;
pub use input::*;
pub use style::*;
