//! Save/restore protocol for the console input mode

use super::{Console, VIRTUAL_TERMINAL_INPUT};
use tracing::debug;

/// Console input mode captured once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleModeSnapshot {
    /// Mode bitmask read before anything else ran
    pub original_mode: u32,
    /// Whether the console accepted `ENABLE_VIRTUAL_TERMINAL_INPUT` during the probe
    pub vt_input_supported: bool,
}

impl ConsoleModeSnapshot {
    /// Mode to write back when the process is done
    #[must_use]
    pub const fn restored_mode(&self) -> u32 {
        if self.vt_input_supported {
            self.original_mode | VIRTUAL_TERMINAL_INPUT
        } else {
            self.original_mode
        }
    }
}

/// Capture the console input mode and probe for virtual-terminal input
///
/// The probe writes `mode | VIRTUAL_TERMINAL_INPUT` and then writes the
/// original mode back whether or not the probe succeeded. Returns `None` when
/// the console cannot be opened or read.
pub fn save<C: Console + ?Sized>(console: &C) -> Option<ConsoleModeSnapshot> {
    let mut input = match console.open_input() {
        Ok(input) => input,
        Err(err) => {
            debug!("console input unavailable, skipping mode save: {err}");
            return None;
        }
    };

    let original_mode = match input.mode() {
        Ok(mode) => mode,
        Err(err) => {
            debug!("failed to read console input mode: {err}");
            return None;
        }
    };

    let vt_input_supported = match input.set_mode(original_mode | VIRTUAL_TERMINAL_INPUT) {
        Ok(()) => true,
        Err(err) => {
            debug!("virtual terminal input not supported: {err}");
            false
        }
    };

    // Input handles keep invalid bits even when the write is refused.
    if let Err(err) = input.set_mode(original_mode) {
        debug!("failed to revert console input mode after probe: {err}");
    }

    debug!(original_mode, vt_input_supported, "saved console input mode");
    Some(ConsoleModeSnapshot {
        original_mode,
        vt_input_supported,
    })
}

/// Write the saved mode back on a freshly opened handle
///
/// Failures are logged and otherwise ignored. Calling this repeatedly writes
/// the same mode each time.
pub fn restore<C: Console + ?Sized>(console: &C, snapshot: &ConsoleModeSnapshot) {
    let mut input = match console.open_input() {
        Ok(input) => input,
        Err(err) => {
            debug!("console input unavailable, skipping mode restore: {err}");
            return;
        }
    };

    let mode = snapshot.restored_mode();
    match input.set_mode(mode) {
        Ok(()) => debug!(mode, "restored console input mode"),
        Err(err) => debug!("failed to restore console input mode: {err}"),
    }
}

/// Scoped ownership of the console input mode
///
/// `acquire` saves the mode and dropping the guard restores it, so every way
/// out of the owning scope (return, early error, unwinding panic) passes
/// through [`restore`].
pub struct ConsoleModeGuard<C: Console> {
    console: C,
    snapshot: Option<ConsoleModeSnapshot>,
}

impl<C: Console> ConsoleModeGuard<C> {
    /// Save the current mode of `console`
    #[must_use = "dropping the guard immediately restores the console mode"]
    pub fn acquire(console: C) -> Self {
        let snapshot = save(&console);
        Self { console, snapshot }
    }

    /// Snapshot taken at acquisition, if the console was reachable
    #[must_use]
    pub const fn snapshot(&self) -> Option<&ConsoleModeSnapshot> {
        self.snapshot.as_ref()
    }

    /// Restore the saved mode now; the guard restores again when dropped
    pub fn restore(&self) {
        if let Some(snapshot) = &self.snapshot {
            restore(&self.console, snapshot);
        }
    }
}

impl<C: Console> Drop for ConsoleModeGuard<C> {
    fn drop(&mut self) {
        self.restore();
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use crate::console::MockConsole;

    const MODE: u32 = 0x01f7;

    #[test]
    fn test_save_probes_then_reverts() {
        let console = MockConsole::new(MODE);
        let snapshot = save(&console).unwrap();

        assert_eq!(snapshot.original_mode, MODE);
        assert!(snapshot.vt_input_supported);
        assert_eq!(console.writes(), vec![MODE | VIRTUAL_TERMINAL_INPUT, MODE]);
        assert_eq!(console.current_mode(), MODE);
    }

    #[test]
    fn test_save_reverts_refused_probe() {
        let console = MockConsole::new(MODE).without_vt_input();
        let snapshot = save(&console).unwrap();

        assert!(!snapshot.vt_input_supported);
        assert_eq!(console.current_mode(), MODE);
    }

    #[test]
    fn test_restore_adds_vt_flag_only_when_supported() {
        let supported = MockConsole::new(MODE);
        let snapshot = save(&supported).unwrap();
        supported.set_current_mode(0);
        restore(&supported, &snapshot);
        assert_eq!(supported.current_mode(), MODE | VIRTUAL_TERMINAL_INPUT);

        let refused = MockConsole::new(MODE).without_vt_input();
        let snapshot = save(&refused).unwrap();
        refused.set_current_mode(0);
        restore(&refused, &snapshot);
        assert_eq!(refused.current_mode(), MODE);
    }

    #[test]
    fn test_restore_is_idempotent() {
        let console = MockConsole::new(MODE);
        let snapshot = save(&console).unwrap();

        restore(&console, &snapshot);
        let once = console.current_mode();
        restore(&console, &snapshot);
        assert_eq!(console.current_mode(), once);
    }

    #[test]
    fn test_unreadable_mode_yields_no_snapshot() {
        let console = MockConsole::new(MODE).with_unreadable_mode();
        assert!(save(&console).is_none());
        assert!(console.writes().is_empty());
    }

    #[test]
    fn test_guard_restores_on_drop() {
        let console = MockConsole::new(MODE);
        {
            let guard = ConsoleModeGuard::acquire(console.clone());
            assert_eq!(guard.snapshot().unwrap().original_mode, MODE);
            console.set_current_mode(0x0007);
        }
        assert_eq!(console.current_mode(), MODE | VIRTUAL_TERMINAL_INPUT);
    }

    #[test]
    fn test_guard_opens_fresh_handle_per_access() {
        let console = MockConsole::new(MODE);
        let guard = ConsoleModeGuard::acquire(console.clone());
        assert_eq!(console.opens(), 1);
        guard.restore();
        drop(guard);
        assert_eq!(console.opens(), 3);
    }
}
