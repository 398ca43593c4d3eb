use std::env;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::logic::HISTORY_KEY;

/// Directory given on the command line (`--config-dir`), if any.
static CONFIG_DIR_OVERRIDE: OnceLock<PathBuf> = OnceLock::new();

/// What: Pin the configuration directory for the rest of the process.
///
/// Inputs:
/// - `dir`: Directory to use instead of the HOME/XDG lookup.
///
/// Output:
/// - `true` if the override was installed, `false` if one was already set.
pub fn set_config_dir_override(dir: PathBuf) -> bool {
    CONFIG_DIR_OVERRIDE.set(dir).is_ok()
}

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Return `$HOME/.config/tallybox`, ensuring it exists.
///
/// Output: `Some(PathBuf)` when HOME is set and directory can be created; `None` otherwise.
fn home_config_dir() -> Option<PathBuf> {
    if let Ok(home) = env::var("HOME") {
        let dir = Path::new(&home).join(".config").join("tallybox");
        if std::fs::create_dir_all(&dir).is_ok() {
            return Some(dir);
        }
    }
    None
}

/// Config directory for tallybox (ensured to exist).
///
/// Order: `--config-dir` override, `TALLYBOX_CONFIG_DIR`, `$HOME/.config/tallybox`,
/// then `$XDG_CONFIG_HOME/tallybox`.
pub fn config_dir() -> PathBuf {
    if let Some(dir) = CONFIG_DIR_OVERRIDE.get() {
        let _ = std::fs::create_dir_all(dir);
        return dir.clone();
    }
    if let Ok(p) = env::var("TALLYBOX_CONFIG_DIR")
        && !p.trim().is_empty()
    {
        let dir = PathBuf::from(p);
        let _ = std::fs::create_dir_all(&dir);
        return dir;
    }
    if let Some(dir) = home_config_dir() {
        return dir;
    }
    let base = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]);
    let dir = base.join("tallybox");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: `<config>/logs` (ensured to exist)
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// `<config>/settings.conf`
pub fn settings_path() -> PathBuf {
    config_dir().join("settings.conf")
}

/// `<config>/theme.conf`
pub fn theme_path() -> PathBuf {
    config_dir().join("theme.conf")
}

/// Default history location: `<config>/calculatorHistory.json`
pub fn history_path() -> PathBuf {
    config_dir().join(format!("{HISTORY_KEY}.json"))
}
