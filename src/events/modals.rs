use crossterm::event::{KeyCode, KeyEvent};

use crate::state::{AppState, Modal};
use crate::theme::KeyMap;

/// What: Handle a key press while a modal is open.
///
/// Inputs:
/// - `ke`: Key event.
/// - `app`: Mutable application state.
///
/// Details:
/// - Alert closes on Enter/Esc; Help also closes on its own toggle chord.
/// - Every other key is swallowed so it cannot reach the calculator.
pub(super) fn handle_modal_key(ke: KeyEvent, app: &mut AppState) {
    let close = match &app.modal {
        Modal::Alert { .. } => matches!(ke.code, KeyCode::Enter | KeyCode::Esc),
        Modal::Help => {
            matches!(ke.code, KeyCode::Enter | KeyCode::Esc)
                || KeyMap::any_matches(&app.settings.keymap.help_overlay, ke.code, ke.modifiers)
        }
        Modal::None => false,
    };
    if close {
        app.modal = Modal::None;
    }
}
