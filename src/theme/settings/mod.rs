use std::fs;
use std::path::Path;

use crate::theme::paths::settings_path;
use crate::theme::types::Settings;

mod parse_keybinds;
mod parse_settings;

use parse_keybinds::parse_keybinds;
use parse_settings::parse_settings;

/// What: Parse a full settings.conf document on top of the defaults.
///
/// Inputs:
/// - `content`: File content.
///
/// Output:
/// - Resulting `Settings`.
#[must_use]
pub fn parse_content(content: &str) -> Settings {
    let mut out = Settings::default();
    parse_settings(content, &mut out);
    parse_keybinds(content, &mut out);
    out
}

/// What: Load settings from a specific file.
///
/// Inputs:
/// - `path`: settings.conf location.
///
/// Output:
/// - Parsed `Settings`; defaults when the file is missing or unreadable.
#[must_use]
pub fn load_settings_from(path: &Path) -> Settings {
    match fs::read_to_string(path) {
        Ok(content) => {
            tracing::debug!(path = %path.display(), "[Config] Loaded settings");
            parse_content(&content)
        }
        Err(e) => {
            tracing::debug!(
                path = %path.display(),
                error = %e,
                "[Config] Settings unavailable; using defaults"
            );
            Settings::default()
        }
    }
}

/// What: Load user settings and keybinds from `<config>/settings.conf`.
///
/// Output:
/// - A `Settings` value; falls back to `Settings::default()` when missing or invalid.
#[must_use]
pub fn settings() -> Settings {
    load_settings_from(&settings_path())
}
