//! Win32 console implementation backed by `CONIN$`

use super::{Console, ConsoleInput};
use std::fs::{File, OpenOptions};
use std::io;
use std::os::windows::io::AsRawHandle as _;
use windows_sys::Win32::Foundation::HANDLE;
use windows_sys::Win32::System::Console::{GetConsoleMode, SetConsoleMode};

/// Reserved device name of the console input buffer
const CONSOLE_INPUT_DEVICE: &str = "CONIN$";

/// Production console for Windows
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsConsole;

impl WindowsConsole {
    /// Create a new `WindowsConsole` instance
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Console for WindowsConsole {
    fn open_input(&self) -> io::Result<Box<dyn ConsoleInput + '_>> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(CONSOLE_INPUT_DEVICE)?;
        Ok(Box::new(WindowsConsoleInput { file }))
    }
}

/// Open `CONIN$` handle; closed when the file is dropped
struct WindowsConsoleInput {
    file: File,
}

impl WindowsConsoleInput {
    fn handle(&self) -> HANDLE {
        self.file.as_raw_handle() as HANDLE
    }
}

impl ConsoleInput for WindowsConsoleInput {
    fn mode(&self) -> io::Result<u32> {
        let mut mode: u32 = 0;
        // SAFETY: the handle is owned by `self.file` and stays open for the call.
        if unsafe { GetConsoleMode(self.handle(), &mut mode) } == 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(mode)
    }

    fn set_mode(&mut self, mode: u32) -> io::Result<()> {
        // SAFETY: the handle is owned by `self.file` and stays open for the call.
        if unsafe { SetConsoleMode(self.handle(), mode) } == 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }
}
