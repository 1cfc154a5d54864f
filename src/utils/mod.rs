//! Utility functions and helpers

pub mod stdin;
