use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use super::parsing::{parse_color_value, split_key_value};
use super::paths::theme_path;
use super::types::Theme;

/// Process-wide palette, loaded on first use.
static THEME_STORE: OnceLock<Theme> = OnceLock::new();

/// What: Map a normalized theme key to the palette field it sets.
///
/// Details:
/// - Accepts both the descriptive names from the skeleton and the short palette names.
fn apply_color(theme: &mut Theme, key: &str, value: &str) -> bool {
    let Some(color) = parse_color_value(value) else {
        return false;
    };
    let slot = match key {
        "base" | "background" | "background_base" => &mut theme.base,
        "mantle" | "background_mantle" => &mut theme.mantle,
        "crust" | "background_crust" => &mut theme.crust,
        "surface1" | "surface_level1" => &mut theme.surface1,
        "surface2" | "surface_level2" => &mut theme.surface2,
        "overlay1" | "overlay_primary" => &mut theme.overlay1,
        "overlay2" | "overlay_secondary" => &mut theme.overlay2,
        "text" | "text_primary" => &mut theme.text,
        "subtext0" | "text_secondary" => &mut theme.subtext0,
        "sapphire" | "accent_interactive" => &mut theme.sapphire,
        "mauve" | "accent_heading" => &mut theme.mauve,
        "green" | "semantic_success" => &mut theme.green,
        "yellow" | "semantic_warning" => &mut theme.yellow,
        "red" | "semantic_error" => &mut theme.red,
        "lavender" | "accent_emphasis" => &mut theme.lavender,
        _ => return false,
    };
    *slot = color;
    true
}

/// What: Parse theme.conf content on top of the built-in palette.
///
/// Output:
/// - Resulting theme; unknown keys and invalid colors are logged and skipped.
#[must_use]
pub fn parse_theme(content: &str) -> Theme {
    let mut theme = Theme::default();
    for line in content.lines() {
        let Some((key, val)) = split_key_value(line) else {
            continue;
        };
        if !apply_color(&mut theme, &key, val) {
            tracing::debug!(key = %key, value = %val, "[Config] Ignoring theme entry");
        }
    }
    theme
}

/// Load the palette from `path`, or the built-in palette when unreadable.
fn load_theme_from(path: &Path) -> Theme {
    fs::read_to_string(path).map_or_else(
        |_| Theme::default(),
        |content| {
            tracing::info!(path = %path.display(), "loaded theme configuration");
            parse_theme(&content)
        },
    )
}

/// Return the application's theme palette, loading `theme.conf` on first use.
pub fn theme() -> Theme {
    *THEME_STORE.get_or_init(|| load_theme_from(&theme_path()))
}
