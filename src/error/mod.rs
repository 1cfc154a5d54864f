//! Error handling module
//!
//! Defines custom error types with reserved exit codes

pub mod types;

pub use types::*;
