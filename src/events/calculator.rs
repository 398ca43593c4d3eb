//! Fixed calculator key map.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::logic::Operator;
use crate::state::{AppState, KeypadButton};

/// What: Map a key press onto the keypad button it stands for.
///
/// Inputs:
/// - `code`: Key code.
/// - `mods`: Active modifiers.
///
/// Output:
/// - `Some(button)` for digits, `.`, `+ - * / %`, Enter/`=`, Esc and Backspace; `None` otherwise.
///
/// Details:
/// - Keys held with Ctrl or Alt are never calculator input.
#[must_use]
pub fn button_for_key(code: KeyCode, mods: KeyModifiers) -> Option<KeypadButton> {
    if mods.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }
    match code {
        KeyCode::Char(ch) if ch.is_ascii_digit() || ch == '.' => Some(KeypadButton::Digit(ch)),
        KeyCode::Char('=') | KeyCode::Enter => Some(KeypadButton::Equals),
        KeyCode::Char(ch) => Operator::from_key(ch).map(KeypadButton::Operator),
        KeyCode::Esc => Some(KeypadButton::Clear),
        KeyCode::Backspace => Some(KeypadButton::Backspace),
        _ => None,
    }
}

/// Apply a calculator key to the accumulator; unmapped keys are ignored.
pub(super) fn handle_calculator_key(ke: KeyEvent, app: &mut AppState) {
    if let Some(button) = button_for_key(ke.code, ke.modifiers) {
        app.press(button);
    }
}
