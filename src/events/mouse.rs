//! Mouse event handling: keypad clicks and modal dismissal.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::state::{AppState, KeypadButton, Modal};

/// What: Handle a single mouse event and update the [`AppState`].
///
/// Inputs:
/// - `m`: Mouse event including position, button, and modifiers.
/// - `app`: Mutable application state (rects recorded by the last render).
///
/// Details:
/// - Only left-button presses do anything.
/// - Modal-first: an open Alert closes on any click; Help closes on a click outside it.
/// - Otherwise the click is hit-tested against keypad buttons and the
///   "Clear history" button.
pub(super) fn handle_mouse_event(m: MouseEvent, app: &mut AppState) {
    if !matches!(m.kind, MouseEventKind::Down(MouseButton::Left)) {
        return;
    }
    let pos = Position::new(m.column, m.row);

    match app.modal {
        Modal::Alert { .. } => {
            app.modal = Modal::None;
            return;
        }
        Modal::Help => {
            if !app.modal_rect.is_some_and(|r| r.contains(pos)) {
                app.modal = Modal::None;
            }
            return;
        }
        Modal::None => {}
    }

    if app.clear_history_rect.is_some_and(|r| r.contains(pos)) {
        app.press(KeypadButton::ClearHistory);
        return;
    }
    let hit = app
        .keypad_rects
        .iter()
        .find(|(rect, _)| rect.contains(pos))
        .map(|(_, button)| *button);
    if let Some(button) = hit {
        tracing::trace!(button = ?button, "[Runtime] Keypad click");
        app.press(button);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;

    fn click(col: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: col,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[test]
    /// What: Clicks inside recorded rects press the matching button.
    ///
    /// Inputs:
    /// - Two fake button rects; clicks inside, outside, and with the right button.
    ///
    /// Output:
    /// - Digits appended for the inside clicks; the other clicks are ignored.
    fn clicks_hit_recorded_rects() {
        let mut app = AppState::default();
        app.keypad_rects = vec![
            (Rect::new(0, 0, 4, 2), KeypadButton::Digit('4')),
            (Rect::new(4, 0, 4, 2), KeypadButton::Digit('2')),
        ];
        handle_mouse_event(click(1, 1), &mut app);
        handle_mouse_event(click(5, 0), &mut app);
        handle_mouse_event(click(30, 30), &mut app);
        assert_eq!(app.calc.current_operand(), "42");

        let mut right = click(1, 1);
        right.kind = MouseEventKind::Down(MouseButton::Right);
        handle_mouse_event(right, &mut app);
        assert_eq!(app.calc.current_operand(), "42");
    }

    #[test]
    /// What: A click anywhere dismisses an alert without pressing a button.
    fn click_dismisses_alert() {
        let mut app = AppState::default();
        app.keypad_rects = vec![(Rect::new(0, 0, 4, 2), KeypadButton::Digit('9'))];
        app.modal = Modal::Alert {
            message: "Cannot divide by zero!".into(),
        };
        handle_mouse_event(click(1, 1), &mut app);
        assert_eq!(app.modal, Modal::None);
        assert_eq!(app.calc.current_operand(), "0");
    }
}
