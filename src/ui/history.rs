use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, KeypadButton};
use crate::theme::theme;
use crate::ui::helpers::fit_tail;

/// What: Render the history pane (most recent first) with a "Clear history" button in its title row.
///
/// Inputs:
/// - `f`: Frame to render into.
/// - `app`: Application state; `clear_history_rect` receives the button rectangle.
/// - `area`: Target rectangle.
pub fn render_history(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let block = Block::default()
        .title(Span::styled(
            format!("History ({})", app.calc.history().len()),
            Style::default().fg(th.overlay1),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface2))
        .style(Style::default().bg(th.base));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let width = usize::from(inner.width);
    let items: Vec<ListItem> = if app.calc.history().is_empty() {
        vec![ListItem::new(Span::styled(
            "No calculations yet",
            Style::default().fg(th.overlay1),
        ))]
    } else {
        app.calc
            .history()
            .iter()
            .map(|rec| {
                ListItem::new(Span::styled(
                    fit_tail(rec, width),
                    Style::default().fg(th.subtext0),
                ))
            })
            .collect()
    };
    f.render_widget(List::new(items), inner);

    // Button sits on the top border, right-aligned inside the corners
    let label = format!("[ {} ]", KeypadButton::ClearHistory.label());
    let label_w = u16::try_from(UnicodeWidthStr::width(label.as_str())).unwrap_or(u16::MAX);
    if area.height == 0 || area.width < label_w.saturating_add(2) {
        return;
    }
    let rect = Rect {
        x: area.x + area.width - 1 - label_w,
        y: area.y,
        width: label_w,
        height: 1,
    };
    let button = Paragraph::new(Line::from(Span::styled(
        label,
        Style::default().fg(th.red).add_modifier(Modifier::BOLD),
    )));
    f.render_widget(button, rect);
    app.clear_history_rect = Some(rect);
}
