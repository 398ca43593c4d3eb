//! Command-line history management (`--print-history`, `--clear-history`).

use std::path::Path;

use tallybox::app::history_file_path;
use tallybox::logic::{HISTORY_CAP, HistoryStore, JsonFileStore, StoreError};
use tallybox::theme;

/// What: Format stored records for printing, most recent first and numbered.
///
/// Inputs:
/// - `records`: Loaded history, `None` when nothing is stored.
///
/// Output:
/// - One line per record (capped at the history length), or a single "no history" line.
pub fn history_lines(records: Option<Vec<String>>) -> Vec<String> {
    let records = records.unwrap_or_default();
    if records.is_empty() {
        return vec!["No calculation history.".to_string()];
    }
    records
        .iter()
        .take(HISTORY_CAP)
        .enumerate()
        .map(|(i, rec)| format!("{:>2}. {rec}", i + 1))
        .collect()
}

/// What: Overwrite the store with an empty history.
///
/// # Errors
/// - Propagates the store's write error.
pub fn clear_store(store: &mut dyn HistoryStore) -> Result<(), StoreError> {
    store.save(&[])
}

/// What: Handle `--print-history` by printing the saved history and exiting.
///
/// Inputs:
/// - `override_path`: `--history-file`, if given.
///
/// Output:
/// - Exits the process after printing (doesn't launch TUI).
pub fn handle_print_history(override_path: Option<&Path>) -> ! {
    let path = history_file_path(&theme::settings(), override_path);
    tracing::info!(path = %path.display(), "Print history requested from CLI");
    let store = JsonFileStore::new(path);
    for line in history_lines(store.load()) {
        println!("{line}");
    }
    std::process::exit(0);
}

/// What: Handle `--clear-history` by emptying the saved history and exiting.
///
/// Inputs:
/// - `override_path`: `--history-file`, if given.
///
/// Output:
/// - Exits with status 0 on success, 1 when the file cannot be written.
pub fn handle_clear_history(override_path: Option<&Path>) -> ! {
    let path = history_file_path(&theme::settings(), override_path);
    tracing::info!(path = %path.display(), "Clear history requested from CLI");
    let mut store = JsonFileStore::new(path.clone());
    match clear_store(&mut store) {
        Ok(()) => {
            println!("Cleared calculation history ({})", path.display());
            std::process::exit(0);
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to clear history");
            eprintln!("Failed to clear history: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tallybox::logic::MemoryStore;

    #[test]
    /// What: Printed history is numbered, most recent first, and capped.
    fn history_lines_numbered_and_capped() {
        assert_eq!(history_lines(None), ["No calculation history."]);
        assert_eq!(history_lines(Some(Vec::new())), ["No calculation history."]);

        let records: Vec<String> = (0..12).map(|i| format!("{i} + 0 = {i}")).collect();
        let lines = history_lines(Some(records));
        assert_eq!(lines.len(), HISTORY_CAP);
        assert_eq!(lines[0], " 1. 0 + 0 = 0");
        assert_eq!(lines[9], "10. 9 + 0 = 9");
    }

    #[test]
    /// What: Clearing writes an empty list that loads back as empty.
    fn clear_store_empties_history() {
        let mut store = MemoryStore::with_records(vec!["1 + 1 = 2".to_string()]);
        clear_store(&mut store).expect("clear");
        assert_eq!(store.load(), Some(Vec::new()));
    }
}
