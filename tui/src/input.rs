//! Keyboard input handling.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use sentinel_engine::{App, SubmitOutcome};

/// Drain all pending terminal events without blocking.
///
/// Returns `true` when the operator asked to quit.
pub fn handle_events(app: &mut App) -> Result<bool> {
    while event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if is_quit(key.code, key.modifiers) {
                return Ok(true);
            }
            handle_key(app, key.code, key.modifiers);
        }
    }
    Ok(false)
}

fn is_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
    matches!(code, KeyCode::Esc)
        || (modifiers.contains(KeyModifiers::CONTROL) && matches!(code, KeyCode::Char('c')))
}

fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    // All editing targets the scan input, which only exists once unlocked.
    if !app.is_unlocked() {
        return;
    }
    match code {
        KeyCode::Enter => match app.submit() {
            SubmitOutcome::Dispatched | SubmitOutcome::EmptyTarget => {}
            SubmitOutcome::AuditInFlight => {
                tracing::debug!("Enter ignored: scan in progress");
            }
            SubmitOutcome::Locked => {
                tracing::debug!("Enter ignored: surface locked");
            }
        },
        KeyCode::Backspace => app.delete_input_char(),
        KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => app.clear_input(),
        KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => app.push_input(c),
        _ => {}
    }
}
