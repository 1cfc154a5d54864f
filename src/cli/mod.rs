//! Command-line interface module
//!
//! Handles argument parsing and sub-command dispatch

pub mod args;
pub mod commands;
pub mod defaults;

pub use args::*;
pub use commands::*;
