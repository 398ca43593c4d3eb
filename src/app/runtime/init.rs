use std::path::PathBuf;

use crate::logic::Accumulator;
use crate::state::AppState;
use crate::theme::{ensure_config_files, settings};

use super::super::persist::open_history_store;

/// What: Session options taken from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// `--history-file` override.
    pub history_file: Option<PathBuf>,
    /// `false` when `--no-persist` was given.
    pub persist: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            history_file: None,
            persist: true,
        }
    }
}

/// What: Build the application state for a session.
///
/// Inputs:
/// - `options`: Command-line session options.
///
/// Output:
/// - `AppState` whose accumulator has loaded persisted history.
///
/// Details:
/// - Writes skeleton `settings.conf`/`theme.conf` when missing, then loads settings.
/// - Result precision comes from settings; the history store from settings plus options.
#[must_use]
pub fn initialize_app_state(options: &RunOptions) -> AppState {
    ensure_config_files();
    let prefs = settings();
    let store = open_history_store(&prefs, options.persist, options.history_file.as_deref());
    let calc = Accumulator::new(store).with_precision(prefs.result_precision);
    tracing::info!(
        history = calc.history().len(),
        precision = ?prefs.result_precision,
        "[Runtime] Application state initialized"
    );
    AppState::new(calc, prefs)
}
