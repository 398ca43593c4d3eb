//! Theme, settings and configuration paths for tallybox.
//!
//! Only what the runtime, UI, and CLI need is re-exported.

/// Default configuration files.
mod config;
/// Configuration parsing utilities.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Settings access.
mod settings;
/// Theme store and parsing.
mod store;
/// Theme type definitions.
mod types;

pub use config::ensure_config_files;
pub use paths::{history_path, logs_dir, set_config_dir_override};
pub use settings::settings;
pub use store::theme;
pub use types::{KeyChord, KeyMap, Settings, Theme};
