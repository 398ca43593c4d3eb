use ratatui::{
    Frame,
    prelude::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::state::{AppState, Modal};
use crate::theme::{KeyChord, theme};
use crate::ui::helpers::centered_rect;

/// Join the labels of all chords bound to one action.
fn chord_list(chords: &[KeyChord]) -> String {
    chords
        .iter()
        .map(KeyChord::label)
        .collect::<Vec<_>>()
        .join(", ")
}

/// What: Draw a centered double-bordered box and return its rectangle.
fn render_box(
    f: &mut Frame,
    rect: Rect,
    title: &str,
    accent: Color,
    lines: Vec<Line<'static>>,
) -> Rect {
    let th = theme();
    f.render_widget(Clear, rect);
    let boxw = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.mantle))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {title} "),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(accent))
                .style(Style::default().bg(th.mantle)),
        );
    f.render_widget(boxw, rect);
    rect
}

/// Render modal overlays: Alert and Help.
///
/// Clears the area behind the modal and draws a styled box centered on the
/// screen. The Help modal reflects the current keymap.
pub fn render_modals(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let rect = match &app.modal {
        Modal::None => return,
        Modal::Alert { message } => {
            let lines = vec![
                Line::from(Span::styled(
                    message.clone(),
                    Style::default().fg(th.red).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Press Enter or Esc to close",
                    Style::default().fg(th.subtext0),
                )),
            ];
            let rect = centered_rect(area, area.width.saturating_sub(10).min(50), 7);
            render_box(f, rect, "Error", th.red, lines)
        }
        Modal::Help => {
            let km = &app.settings.keymap;
            let key_style = Style::default().fg(th.mauve).add_modifier(Modifier::BOLD);
            let row = |key: String, action: &'static str| {
                Line::from(vec![
                    Span::styled(format!("{key:<18}"), key_style),
                    Span::raw(action),
                ])
            };
            let lines = vec![
                row("0-9 .".into(), "Enter digits"),
                row("+ - * /".into(), "Add, subtract, multiply, divide"),
                row("%".into(), "Percentage (a % of b)"),
                row("Enter, =".into(), "Compute"),
                row("Backspace".into(), "Delete last character"),
                row("Esc".into(), "Clear expression"),
                row(chord_list(&km.clear_history), "Clear history"),
                row(chord_list(&km.help_overlay), "Toggle this help"),
                row(chord_list(&km.exit), "Exit"),
                Line::from(""),
                Line::from(Span::styled(
                    "Mouse: click keypad buttons and \"Clear history\"",
                    Style::default().fg(th.subtext0),
                )),
            ];
            let rect = centered_rect(area, area.width.saturating_sub(8).min(60), 15);
            render_box(f, rect, "Help", th.mauve, lines)
        }
    };
    app.modal_rect = Some(rect);
}
