//! TUI rendering for tallybox.
//!
//! `ui` draws the display, keypad, history pane, footer and any open modal,
//! and records the clickable rectangles in [`AppState`] for mouse handling.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

use crate::{state::AppState, theme::theme};

mod display;
mod footer;
/// Small layout and text-fitting helpers shared by the renderers.
pub mod helpers;
mod history;
mod keypad;
mod modals;

/// Height of the display block (two text lines plus borders).
const DISPLAY_HEIGHT: u16 = 4;

/// What: Render a full frame.
///
/// Inputs:
/// - `f`: Frame to render into.
/// - `app`: Mutable application state; hit-test rectangles are refreshed.
///
/// Details:
/// - Layout: calculator column (display over keypad) with the optional history pane on the
///   right and the optional keybind footer on the last line; modals are drawn on top.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();

    app.keypad_rects.clear();
    app.clear_history_rect = None;
    app.modal_rect = None;

    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let footer_h = u16::from(app.settings.show_keybinds_footer);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(footer_h)])
        .split(area);

    let columns = if app.settings.show_history_pane {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[0])
    } else {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(100)])
            .split(rows[0])
    };

    let calc_col = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(DISPLAY_HEIGHT), Constraint::Min(0)])
        .split(columns[0]);

    display::render_display(f, app, calc_col[0]);
    keypad::render_keypad(f, app, calc_col[1]);
    if app.settings.show_history_pane {
        history::render_history(f, app, columns[1]);
    }
    if app.settings.show_keybinds_footer {
        footer::render_footer(f, app, rows[1]);
    }

    modals::render_modals(f, app, area);
}
