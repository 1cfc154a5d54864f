//! Console input mode abstraction
//!
//! Some hosts (PowerShell in particular) keep the input mode bits a child
//! process leaves behind on `CONIN$`. This module captures that mode before any
//! sub-command runs and puts it back afterwards, re-adding
//! `ENABLE_VIRTUAL_TERMINAL_INPUT` only when the console proved it accepts it.
//!
//! # Implementations
//! - `WindowsConsole`: opens `CONIN$` and talks to the Win32 console API
//! - `NoopConsole`: every other platform; never touches anything
//! - `MockConsole`: in-memory console for tests

use std::io;

pub mod guard;
pub mod mock;
pub mod noop;
#[cfg(windows)]
pub mod windows;

pub use guard::{ConsoleModeGuard, ConsoleModeSnapshot, restore, save};
pub use mock::MockConsole;
pub use noop::NoopConsole;
#[cfg(windows)]
pub use windows::WindowsConsole;

/// `ENABLE_VIRTUAL_TERMINAL_INPUT` from the Win32 console API
pub const VIRTUAL_TERMINAL_INPUT: u32 = 0x0200;

/// Console implementation for the platform this binary was built for
#[cfg(windows)]
pub type PlatformConsole = WindowsConsole;

/// Console implementation for the platform this binary was built for
#[cfg(not(windows))]
pub type PlatformConsole = NoopConsole;

/// An open console input handle, released when dropped
pub trait ConsoleInput {
    /// Read the current input mode bitmask
    fn mode(&self) -> io::Result<u32>;

    /// Write a new input mode bitmask
    fn set_mode(&mut self, mode: u32) -> io::Result<()>;
}

/// Source of console input handles
///
/// Every call to [`Console::open_input`] opens a fresh handle; callers never
/// keep one across sub-command execution.
pub trait Console {
    /// Open the console input stream
    fn open_input(&self) -> io::Result<Box<dyn ConsoleInput + '_>>;
}
