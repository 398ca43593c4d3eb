//! tallybox application runtime (terminal lifecycle, event thread, and event loop).
//!
//! This module encapsulates the TUI runtime so that the binary entrypoint stays minimal.

/// History store selection from settings and command-line overrides.
mod persist;
/// Runtime orchestration: initialization, event loop, and cleanup.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

pub use persist::{history_file_path, open_history_store};
pub use runtime::init::{RunOptions, initialize_app_state};
pub use runtime::{event_loop::run_event_loop, run};
