//! Event handling layer for tallybox's TUI.
//!
//! This module re-exports `handle_event` and delegates modal, global-shortcut,
//! calculator-key and mouse handling to submodules.

use crossterm::event::{Event as CEvent, KeyEventKind};

use crate::state::AppState;

mod calculator;
mod global;
mod modals;
mod mouse;

pub use calculator::button_for_key;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
///
/// Details:
/// - Open modals consume all input.
/// - Global shortcuts (exit, help, clear history) are checked before calculator keys.
pub fn handle_event(ev: CEvent, app: &mut AppState) -> bool {
    match ev {
        CEvent::Key(ke) => {
            if ke.kind != KeyEventKind::Press {
                return false;
            }
            if app.modal.is_open() {
                modals::handle_modal_key(ke, app);
                return false;
            }
            if let Some(exit) = global::handle_global_key(ke, app) {
                return exit;
            }
            calculator::handle_calculator_key(ke, app);
            false
        }
        CEvent::Mouse(m) => {
            mouse::handle_mouse_event(m, app);
            false
        }
        _ => false,
    }
}
