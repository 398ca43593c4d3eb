use std::time::Duration;

use crossterm::event::Event as CEvent;
use ratatui::{Terminal, backend::Backend};
use tokio::{
    select,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};

use crate::events::handle_event;
use crate::state::AppState;
use crate::ui::ui;

/// Redraw interval while idle, so resizes show up without input.
const TICK: Duration = Duration::from_millis(250);

/// What: Wait for the next input event or tick.
///
/// Inputs:
/// - `app`: Application state.
/// - `events`: Receiver of terminal events.
/// - `tick`: Periodic redraw timer.
///
/// Output: `true` if the event loop should exit, `false` to continue.
///
/// Details:
/// - A closed event channel counts as an exit request.
async fn process_next(
    app: &mut AppState,
    events: &mut mpsc::UnboundedReceiver<CEvent>,
    tick: &mut time::Interval,
) -> bool {
    select! {
        maybe_ev = events.recv() => {
            let Some(ev) = maybe_ev else {
                tracing::debug!("[Runtime] Event channel closed");
                return true;
            };
            handle_event(ev, app)
        }
        _ = tick.tick() => false,
    }
}

/// What: Run the main event loop: render, wait for an event or tick, dispatch it.
///
/// Inputs:
/// - `terminal`: Optional terminal for rendering (None in headless mode).
/// - `app`: Application state.
/// - `events`: Receiver of terminal events.
///
/// Output: None (runs until exit condition is met)
///
/// Details:
/// - Exits when an event handler returns `true` (exit chord) or the event channel closes.
pub async fn run_event_loop<B: Backend>(
    terminal: &mut Option<Terminal<B>>,
    app: &mut AppState,
    events: &mut mpsc::UnboundedReceiver<CEvent>,
) {
    let mut tick = time::interval(TICK);
    tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
    loop {
        if let Some(t) = terminal.as_mut()
            && let Err(e) = t.draw(|f| ui(f, app))
        {
            tracing::warn!(error = %e, "[Runtime] Failed to draw frame");
        }
        if process_next(app, events, &mut tick).await {
            break;
        }
    }
}
