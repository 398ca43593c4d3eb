use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    prelude::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::state::{AppState, KEYPAD_ROWS, KeypadButton};
use crate::theme::{Theme, theme};

/// Buttons per full keypad row.
const COLUMNS: u32 = 4;

/// Accent color for a keypad button.
const fn button_color(button: KeypadButton, th: &Theme) -> Color {
    match button {
        KeypadButton::Digit(_) => th.sapphire,
        KeypadButton::Operator(_) => th.mauve,
        KeypadButton::Equals => th.green,
        KeypadButton::Clear | KeypadButton::Backspace | KeypadButton::ClearHistory => th.red,
    }
}

/// What: Column constraints for one keypad row.
///
/// Details:
/// - Short rows let their first button span the missing columns (the wide `0`).
fn row_constraints(len: usize) -> Vec<Constraint> {
    let len = u32::try_from(len).unwrap_or(COLUMNS).clamp(1, COLUMNS);
    let mut out = vec![Constraint::Ratio(COLUMNS - len + 1, COLUMNS)];
    out.extend((1..len).map(|_| Constraint::Ratio(1, COLUMNS)));
    out
}

/// What: Render the keypad grid and record each button's rectangle.
///
/// Inputs:
/// - `f`: Frame to render into.
/// - `app`: Application state; `keypad_rects` receives the button rectangles.
/// - `area`: Target rectangle.
pub fn render_keypad(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let row_count = u32::try_from(KEYPAD_ROWS.len()).unwrap_or(1);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(KEYPAD_ROWS.iter().map(|_| Constraint::Ratio(1, row_count)))
        .split(area);

    for (row_area, buttons) in rows.iter().zip(KEYPAD_ROWS.iter()) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(row_constraints(buttons.len()))
            .split(*row_area);
        for (cell, &button) in cells.iter().zip(buttons.iter()) {
            if cell.width == 0 || cell.height == 0 {
                continue;
            }
            let color = button_color(button, &th);
            // Vertically center the label inside the bordered cell.
            let pad = cell.height.saturating_sub(3) / 2;
            let mut text = vec![Line::default(); usize::from(pad)];
            text.push(Line::from(Span::styled(
                button.label(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )));
            let widget = Paragraph::new(text)
                .alignment(Alignment::Center)
                .style(Style::default().bg(th.base))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(th.surface1)),
                );
            f.render_widget(widget, *cell);
            app.keypad_rects.push((*cell, button));
        }
    }
}
