use std::path::PathBuf;

use crate::theme::parsing::{parse_bool, split_key_value};
use crate::theme::types::Settings;

/// Largest accepted `result_precision`; beyond this f64 has no meaningful digits left.
const MAX_RESULT_PRECISION: u8 = 15;

/// What: Parse non-keybind settings from settings.conf content.
///
/// Inputs:
/// - `content`: Content of the settings.conf file as a string.
/// - `settings`: Mutable reference to `Settings` to populate.
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - Invalid values keep the current value and are logged at debug level.
/// - Intentionally ignores `keybind_*` entries (handled separately).
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for line in content.lines() {
        let Some((key, val)) = split_key_value(line) else {
            continue;
        };
        if key.starts_with("keybind_") {
            continue;
        }
        match key.as_str() {
            "result_precision" | "precision" | "decimal_places" => {
                if val.eq_ignore_ascii_case("none") || val.eq_ignore_ascii_case("raw") {
                    settings.result_precision = None;
                } else if let Ok(v) = val.parse::<u8>() {
                    settings.result_precision = Some(v.min(MAX_RESULT_PRECISION));
                } else {
                    tracing::debug!(value = %val, "[Config] Invalid result_precision");
                }
            }
            "show_history_pane" | "history_visible" => {
                if let Some(v) = parse_bool(val) {
                    settings.show_history_pane = v;
                }
            }
            "show_keybinds_footer" | "keybinds_visible" => {
                if let Some(v) = parse_bool(val) {
                    settings.show_keybinds_footer = v;
                }
            }
            "persist_history" | "save_history" => {
                if let Some(v) = parse_bool(val) {
                    settings.persist_history = v;
                }
            }
            "history_file" | "history_path" => {
                settings.history_file = if val.is_empty() {
                    None
                } else {
                    Some(expand_home(val))
                };
            }
            other => {
                tracing::debug!(key = %other, "[Config] Ignoring unknown settings key");
            }
        }
    }
}

/// Expand a leading `~/` using `$HOME`.
fn expand_home(val: &str) -> PathBuf {
    if let Some(rest) = val.strip_prefix("~/")
        && let Ok(home) = std::env::var("HOME")
    {
        return PathBuf::from(home).join(rest);
    }
    PathBuf::from(val)
}
