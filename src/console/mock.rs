//! Mock console implementation for testing

#![expect(clippy::module_name_repetitions)]

use super::{Console, ConsoleInput, VIRTUAL_TERMINAL_INPUT};
use std::io;
use std::sync::{Arc, Mutex, MutexGuard};

/// In-memory implementation of the `Console` trait
///
/// `MockConsole` behaves like a Win32 input buffer: it holds a mode bitmask,
/// can refuse the virtual-terminal flag, and can be made unreachable. A refused
/// write still sticks, the way real input handles remember invalid bits.
///
/// # Example
/// ```
/// use gum::console::{ConsoleModeGuard, MockConsole};
///
/// let console = MockConsole::new(0x01f7);
/// drop(ConsoleModeGuard::acquire(console.clone()));
/// assert_eq!(console.current_mode(), 0x01f7 | 0x0200);
/// ```
#[derive(Clone)]
pub struct MockConsole {
    state: Arc<Mutex<MockConsoleState>>,
}

struct MockConsoleState {
    mode: u32,
    available: bool,
    supports_vt_input: bool,
    readable: bool,
    opens: usize,
    writes: Vec<u32>,
}

impl MockConsole {
    /// Create a reachable console that accepts the virtual-terminal flag
    #[must_use]
    pub fn new(mode: u32) -> Self {
        Self {
            state: Arc::new(Mutex::new(MockConsoleState {
                mode,
                available: true,
                supports_vt_input: true,
                readable: true,
                opens: 0,
                writes: Vec::new(),
            })),
        }
    }

    /// Create a console that can never be opened
    #[must_use]
    pub fn unavailable() -> Self {
        let console = Self::new(0);
        console.lock().available = false;
        console
    }

    /// Refuse writes that include `ENABLE_VIRTUAL_TERMINAL_INPUT` (builder pattern)
    #[must_use]
    pub fn without_vt_input(self) -> Self {
        self.lock().supports_vt_input = false;
        self
    }

    /// Fail every mode read (builder pattern)
    #[must_use]
    pub fn with_unreadable_mode(self) -> Self {
        self.lock().readable = false;
        self
    }

    /// Make the console reachable or unreachable from now on
    pub fn set_available(&self, available: bool) {
        self.lock().available = available;
    }

    /// Change the mode as another process would
    pub fn set_current_mode(&self, mode: u32) {
        self.lock().mode = mode;
    }

    /// Current mode bitmask
    #[must_use]
    pub fn current_mode(&self) -> u32 {
        self.lock().mode
    }

    /// Every mode written so far, in order, including refused ones
    #[must_use]
    pub fn writes(&self) -> Vec<u32> {
        self.lock().writes.clone()
    }

    /// Number of successful `open_input` calls
    #[must_use]
    pub fn opens(&self) -> usize {
        self.lock().opens
    }

    fn lock(&self) -> MutexGuard<'_, MockConsoleState> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl Console for MockConsole {
    fn open_input(&self) -> io::Result<Box<dyn ConsoleInput + '_>> {
        let mut state = self.lock();
        if !state.available {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "mock console is unavailable",
            ));
        }
        state.opens += 1;
        drop(state);
        Ok(Box::new(MockConsoleInput { console: self }))
    }
}

struct MockConsoleInput<'a> {
    console: &'a MockConsole,
}

impl ConsoleInput for MockConsoleInput<'_> {
    fn mode(&self) -> io::Result<u32> {
        let state = self.console.lock();
        if !state.readable {
            return Err(io::Error::other("mock console mode is unreadable"));
        }
        Ok(state.mode)
    }

    fn set_mode(&mut self, mode: u32) -> io::Result<()> {
        let mut state = self.console.lock();
        state.writes.push(mode);
        state.mode = mode;
        if mode & VIRTUAL_TERMINAL_INPUT != 0 && !state.supports_vt_input {
            return Err(io::Error::from_raw_os_error(87));
        }
        Ok(())
    }
}
