//! Central `AppState` container.

use ratatui::layout::Rect;

use crate::logic::{Accumulator, CalcError, MemoryStore};
use crate::state::modal::Modal;
use crate::state::types::KeypadButton;
use crate::theme::Settings;

/// Global application state shared by the event, runtime, and UI layers.
///
/// The accumulator is the only owner of calculator state; this struct adds what the
/// terminal front end needs around it (modal, settings, hit-test rectangles).
#[derive(Debug)]
pub struct AppState {
    /// The calculator.
    pub calc: Accumulator,
    /// Active modal dialog.
    pub modal: Modal,
    /// Loaded settings (layout toggles, keymap).
    pub settings: Settings,
    /// Keypad button rectangles from the last render, for mouse hit-testing.
    pub keypad_rects: Vec<(Rect, KeypadButton)>,
    /// "Clear history" button rectangle from the last render.
    pub clear_history_rect: Option<Rect>,
    /// Inner rectangle of the open modal from the last render.
    pub modal_rect: Option<Rect>,
}

impl AppState {
    /// What: Build the state around an existing accumulator.
    ///
    /// Inputs:
    /// - `calc`: Accumulator (already wired to its history store).
    /// - `settings`: Loaded settings.
    #[must_use]
    pub fn new(calc: Accumulator, settings: Settings) -> Self {
        Self {
            calc,
            modal: Modal::None,
            settings,
            keypad_rects: Vec::new(),
            clear_history_rect: None,
            modal_rect: None,
        }
    }

    /// What: Apply a keypad button to the accumulator.
    ///
    /// Inputs:
    /// - `button`: Button pressed or clicked.
    ///
    /// Details:
    /// - A division by zero opens an alert with the error text.
    pub fn press(&mut self, button: KeypadButton) {
        let outcome = match button {
            KeypadButton::Digit(ch) => {
                self.calc.append_digit(ch);
                Ok(())
            }
            KeypadButton::Operator(op) => self.calc.choose_operator(op),
            KeypadButton::Equals => self.calc.compute(),
            KeypadButton::Clear => {
                self.calc.clear();
                Ok(())
            }
            KeypadButton::Backspace => {
                self.calc.backspace();
                Ok(())
            }
            KeypadButton::ClearHistory => {
                self.calc.clear_history();
                Ok(())
            }
        };
        if let Err(err) = outcome {
            self.show_error(err);
        }
    }

    /// Open an alert for `err`.
    pub fn show_error(&mut self, err: CalcError) {
        tracing::info!(error = %err, "[Runtime] Showing alert");
        self.modal = Modal::Alert {
            message: err.to_string(),
        };
    }
}

impl Default for AppState {
    /// Session-only state with default settings.
    fn default() -> Self {
        Self::new(
            Accumulator::new(Box::new(MemoryStore::new())),
            Settings::default(),
        )
    }
}
