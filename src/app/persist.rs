use std::path::{Path, PathBuf};

use crate::logic::{HistoryStore, JsonFileStore, MemoryStore};
use crate::theme::{Settings, history_path};

/// What: Resolve where history is stored on disk.
///
/// Inputs:
/// - `settings`: Loaded settings (may carry `history_file`).
/// - `override_path`: Command-line `--history-file`, if any.
///
/// Output:
/// - The command-line path, else the settings path, else `<config>/calculatorHistory.json`.
#[must_use]
pub fn history_file_path(settings: &Settings, override_path: Option<&Path>) -> PathBuf {
    override_path
        .map(Path::to_path_buf)
        .or_else(|| settings.history_file.clone())
        .unwrap_or_else(history_path)
}

/// What: Build the history store the accumulator persists through.
///
/// Inputs:
/// - `settings`: Loaded settings (`persist_history`, `history_file`).
/// - `persist`: `false` when `--no-persist` was given.
/// - `override_path`: Command-line `--history-file`, if any.
///
/// Output:
/// - A [`JsonFileStore`] when persistence is enabled; a session-only [`MemoryStore`] otherwise.
#[must_use]
pub fn open_history_store(
    settings: &Settings,
    persist: bool,
    override_path: Option<&Path>,
) -> Box<dyn HistoryStore> {
    if !persist || !settings.persist_history {
        tracing::info!("[Persist] History persistence disabled; using session store");
        return Box::new(MemoryStore::new());
    }
    let path = history_file_path(settings, override_path);
    tracing::debug!(path = %path.display(), "[Persist] Using history file");
    Box::new(JsonFileStore::new(path))
}
