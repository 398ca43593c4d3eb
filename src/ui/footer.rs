use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::AppState;
use crate::theme::{KeyChord, theme};

/// Label for the first chord of a binding, or an empty string when unbound.
fn first_label(chords: &[KeyChord]) -> String {
    chords.first().map(KeyChord::label).unwrap_or_default()
}

/// What: Render the one-line keybind hint footer.
///
/// Inputs:
/// - `f`: Frame to render into.
/// - `app`: Application state (keymap).
/// - `area`: Target rectangle.
pub fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let km = &app.settings.keymap;
    let hints = [
        (first_label(&km.help_overlay), "Help"),
        (first_label(&km.exit), "Exit"),
        (first_label(&km.clear_history), "Clear history"),
        ("Esc".to_string(), "Clear"),
        ("Enter".to_string(), "="),
    ];
    let mut spans: Vec<Span> = Vec::new();
    for (key, action) in hints {
        if key.is_empty() {
            continue;
        }
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            key,
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {action}"),
            Style::default().fg(th.overlay2),
        ));
    }
    let footer = Paragraph::new(Line::from(spans)).style(Style::default().bg(th.crust));
    f.render_widget(footer, area);
}
