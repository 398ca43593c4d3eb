//! Front-end state for tallybox: the [`AppState`] container, modal overlays,
//! and the keypad button model shared by the event and UI layers.

pub mod app_state;
pub mod modal;
pub mod types;

pub use app_state::AppState;
pub use modal::Modal;
pub use types::{KEYPAD_ROWS, KeypadButton};
