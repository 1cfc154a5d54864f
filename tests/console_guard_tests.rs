//! Console input mode save/restore tests

use gum::console::{
    ConsoleModeGuard, MockConsole, NoopConsole, VIRTUAL_TERMINAL_INPUT, restore, save,
};

const POWERSHELL_MODE: u32 = 0x01f7;

#[test]
fn test_save_then_restore_adds_vt_flag_when_supported() {
    let console = MockConsole::new(POWERSHELL_MODE);
    let snapshot = save(&console).unwrap();

    // A prompt leaves the console in raw mode.
    console.set_current_mode(0x0080);
    restore(&console, &snapshot);

    assert_eq!(
        console.current_mode(),
        POWERSHELL_MODE | VIRTUAL_TERMINAL_INPUT
    );
}

#[test]
fn test_save_then_restore_keeps_original_when_vt_refused() {
    let console = MockConsole::new(POWERSHELL_MODE).without_vt_input();
    let snapshot = save(&console).unwrap();
    assert!(!snapshot.vt_input_supported);

    console.set_current_mode(0x0080);
    restore(&console, &snapshot);

    assert_eq!(console.current_mode(), POWERSHELL_MODE);
}

#[test]
fn test_refused_probe_is_reverted_immediately() {
    let console = MockConsole::new(POWERSHELL_MODE).without_vt_input();
    save(&console).unwrap();

    assert_eq!(
        console.writes(),
        vec![POWERSHELL_MODE | VIRTUAL_TERMINAL_INPUT, POWERSHELL_MODE]
    );
    assert_eq!(console.current_mode(), POWERSHELL_MODE);
}

#[test]
fn test_restore_twice_matches_restore_once() {
    let console = MockConsole::new(POWERSHELL_MODE);
    let snapshot = save(&console).unwrap();

    restore(&console, &snapshot);
    let after_one = console.current_mode();
    restore(&console, &snapshot);

    assert_eq!(console.current_mode(), after_one);
}

#[test]
fn test_unavailable_console_is_a_silent_no_op() {
    let console = MockConsole::unavailable();
    let guard = ConsoleModeGuard::acquire(console.clone());
    assert!(guard.snapshot().is_none());
    guard.restore();
    drop(guard);

    assert!(console.writes().is_empty());
    assert_eq!(console.opens(), 0);
}

#[test]
fn test_noop_console_never_yields_a_snapshot() {
    let guard = ConsoleModeGuard::acquire(NoopConsole::new());
    assert!(guard.snapshot().is_none());
}

#[test]
fn test_explicit_restore_then_drop_is_idempotent() {
    let console = MockConsole::new(POWERSHELL_MODE);
    let guard = ConsoleModeGuard::acquire(console.clone());

    console.set_current_mode(0);
    guard.restore();
    let explicit = console.current_mode();
    drop(guard);

    assert_eq!(console.current_mode(), explicit);
    assert_eq!(explicit, POWERSHELL_MODE | VIRTUAL_TERMINAL_INPUT);
}

#[test]
fn test_guard_restores_when_scope_unwinds() {
    let console = MockConsole::new(POWERSHELL_MODE);
    let inner = console.clone();

    let result = std::panic::catch_unwind(move || {
        let _guard = ConsoleModeGuard::acquire(inner.clone());
        inner.set_current_mode(0);
        panic!("sub-command crashed");
    });

    assert!(result.is_err());
    assert_eq!(
        console.current_mode(),
        POWERSHELL_MODE | VIRTUAL_TERMINAL_INPUT
    );
}

#[test]
fn test_restore_ignores_console_lost_after_save() {
    let console = MockConsole::new(POWERSHELL_MODE);
    let snapshot = save(&console).unwrap();
    let writes_after_save = console.writes();

    console.set_current_mode(0x0080);
    console.set_available(false);
    restore(&console, &snapshot);

    assert_eq!(console.writes(), writes_after_save);
    assert_eq!(console.current_mode(), 0x0080);
}

#[test]
fn test_guard_drop_ignores_console_lost_after_save() {
    let console = MockConsole::new(POWERSHELL_MODE);
    let guard = ConsoleModeGuard::acquire(console.clone());
    assert!(guard.snapshot().is_some());

    console.set_available(false);
    guard.restore();
    drop(guard);

    assert_eq!(console.writes().len(), 2);
    assert_eq!(console.opens(), 1);
    assert_eq!(console.current_mode(), POWERSHELL_MODE);
}
