//! Global shortcuts from the configurable keymap.

use crossterm::event::KeyEvent;

use crate::state::{AppState, KeypadButton, Modal};
use crate::theme::KeyMap;

/// What: Handle configurable application-level shortcuts.
///
/// Inputs:
/// - `ke`: Key event.
/// - `app`: Mutable application state.
///
/// Output:
/// - `Some(true)` to exit, `Some(false)` when the key was consumed, `None` when the key
///   is not a global shortcut.
pub(super) fn handle_global_key(ke: KeyEvent, app: &mut AppState) -> Option<bool> {
    let km = &app.settings.keymap;
    if KeyMap::any_matches(&km.exit, ke.code, ke.modifiers) {
        tracing::debug!("[Runtime] Exit requested");
        return Some(true);
    }
    if KeyMap::any_matches(&km.help_overlay, ke.code, ke.modifiers) {
        app.modal = Modal::Help;
        return Some(false);
    }
    if KeyMap::any_matches(&km.clear_history, ke.code, ke.modifiers) {
        app.press(KeypadButton::ClearHistory);
        return Some(false);
    }
    None
}
