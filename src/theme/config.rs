//! Default configuration files written on first run.

use std::fs;
use std::path::Path;

use super::paths::{settings_path, theme_path};

/// Skeleton `settings.conf` with every supported key and its default.
pub const SETTINGS_SKELETON_CONTENT: &str = "# tallybox settings\n\
#\n\
# Format: key = value. Lines starting with # are comments.\n\
#\n\
# Round results to this many decimal places (0-15), or `none` to keep the raw\n\
# floating-point text (e.g. 0.1 + 0.2 = 0.30000000000000004).\n\
result_precision = none\n\
#\n\
# Layout\n\
show_history_pane = true\n\
show_keybinds_footer = true\n\
#\n\
# History storage. When persist_history is false the history only lives for the session.\n\
persist_history = true\n\
# history_file = ~/.config/tallybox/calculatorHistory.json\n\
#\n\
# Key bindings (calculator keys are fixed: digits . + - * / % Enter = Esc Backspace)\n\
keybind_help = F1\n\
keybind_help = ?\n\
keybind_exit = Ctrl+C\n\
keybind_exit = q\n\
keybind_clear_history = Ctrl+X\n";

/// Skeleton `theme.conf`; every line is optional and overrides the built-in palette.
pub const THEME_SKELETON_CONTENT: &str = "# tallybox theme configuration\n\
#\n\
# Format: key = value\n\
# Value formats supported:\n\
#   - #RRGGBB (hex)\n\
#   - R,G,B (decimal, 0-255 each)\n\
# Missing keys keep the built-in Catppuccin Mocha colors.\n\
#\n\
# background_base = #1e1e2e\n\
# background_mantle = #181825\n\
# background_crust = #11111b\n\
# surface_level1 = #45475a\n\
# surface_level2 = #585b70\n\
# overlay_primary = #7f849c\n\
# overlay_secondary = #9399b2\n\
# text_primary = #cdd6f4\n\
# text_secondary = #a6adc8\n\
# accent_interactive = #74c7ec\n\
# accent_heading = #cba6f7\n\
# accent_emphasis = #b4befe\n\
# semantic_success = #a6e3a1\n\
# semantic_warning = #f9e2af\n\
# semantic_error = #f38ba8\n";

/// What: Write `content` to `path` when the file is missing or empty.
///
/// Output:
/// - `true` if a file was written.
///
/// Details:
/// - Failures are logged and otherwise ignored; the app runs on defaults.
fn write_skeleton_if_missing(path: &Path, content: &str) -> bool {
    let empty_or_missing = fs::metadata(path).map_or(true, |m| m.len() == 0);
    if !empty_or_missing {
        return false;
    }
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    match fs::write(path, content) {
        Ok(()) => {
            tracing::info!(path = %path.display(), "[Config] Wrote default configuration");
            true
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "[Config] Failed to write default configuration"
            );
            false
        }
    }
}

/// Create `settings.conf` and `theme.conf` from skeletons if they do not exist yet.
pub fn ensure_config_files() {
    write_skeleton_if_missing(&settings_path(), SETTINGS_SKELETON_CONTENT);
    write_skeleton_if_missing(&theme_path(), THEME_SKELETON_CONTENT);
}
