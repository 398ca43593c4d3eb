use ratatui::{Terminal, backend::CrosstermBackend};

use super::terminal::{restore_terminal, setup_terminal};

mod background;
mod cleanup;
pub mod event_loop;
pub mod init;

use background::{Channels, spawn_event_thread};
use cleanup::cleanup_on_exit;
use event_loop::run_event_loop;
use init::{RunOptions, initialize_app_state};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the tallybox TUI end-to-end: initialize terminal and state, spawn the event
/// thread, drive the event loop, and restore the terminal on exit.
///
/// Inputs:
/// - `options`: Command-line session options (history file override, persistence).
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal errors.
///
/// Details:
/// - `TALLYBOX_TEST_HEADLESS=1` skips terminal setup and the event thread; the loop then
///   ends as soon as it finds the event channel closed.
pub async fn run(options: RunOptions) -> Result<()> {
    let headless = std::env::var("TALLYBOX_TEST_HEADLESS").ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        match Terminal::new(CrosstermBackend::new(std::io::stdout())) {
            Ok(t) => Some(t),
            Err(e) => {
                let _ = restore_terminal();
                return Err(e.into());
            }
        }
    };

    let mut app = initialize_app_state(&options);

    let (mut channels, event_tx) = Channels::new();
    spawn_event_thread(headless, event_tx, channels.event_thread_cancelled.clone());

    run_event_loop(&mut terminal, &mut app, &mut channels.event_rx).await;

    cleanup_on_exit(&app, &channels);
    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
