use ratatui::{
    Frame,
    layout::Alignment,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::state::AppState;
use crate::theme::theme;
use crate::ui::helpers::fit_tail;

/// What: Render the two-line display (pending expression over current operand).
///
/// Inputs:
/// - `f`: Frame to render into.
/// - `app`: Application state.
/// - `area`: Target rectangle.
///
/// Details:
/// - Both lines are right-aligned; text wider than the block keeps its tail.
pub fn render_display(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let inner_w = usize::from(area.width.saturating_sub(2));

    let pending = fit_tail(&app.calc.pending_line(), inner_w);
    let current = fit_tail(app.calc.current_operand(), inner_w);

    let lines = vec![
        Line::from(Span::styled(pending, Style::default().fg(th.yellow))),
        Line::from(Span::styled(
            current,
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )),
    ];
    let display = Paragraph::new(lines)
        .alignment(Alignment::Right)
        .style(Style::default().fg(th.text).bg(th.mantle))
        .block(
            Block::default()
                .title(Span::styled(" tallybox ", Style::default().fg(th.mauve)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.lavender)),
        );
    f.render_widget(display, area);
}
