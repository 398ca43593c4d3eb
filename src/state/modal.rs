//! Modal dialog state for the UI.

/// What: Overlay currently shown on top of the calculator.
///
/// - Input: Set by event handlers (errors, help key).
/// - Output: Drawn by the modal renderer; while open it swallows calculator input.
/// - Details: Only one modal is open at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    /// Nothing open.
    #[default]
    None,
    /// Blocking message (e.g. "Cannot divide by zero!"), dismissed with Enter/Esc or a click.
    Alert {
        /// Text to show.
        message: String,
    },
    /// Key binding overview.
    Help,
}

impl Modal {
    /// Whether any modal is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}
