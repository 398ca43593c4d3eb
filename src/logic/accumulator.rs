//! Two-operand calculator state machine with a capped, persisted history.

use thiserror::Error;

use super::format::{format_number, format_result, parse_operand};
use super::operator::Operator;
use super::store::HistoryStore;

/// Maximum number of history records kept (most recent first).
pub const HISTORY_CAP: usize = 10;

/// Errors surfaced to the user by accumulator operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// A division had a zero divisor; the expression was discarded.
    #[error("Cannot divide by zero!")]
    DivideByZero,
}

/// Logical mode of the accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Building the current operand, nothing pending.
    Entry,
    /// An operator is pending; the current operand is the right-hand side.
    Pending,
    /// The current operand holds the last result.
    Result,
}

/// Calculator state: current/previous operand text, pending operator, and history.
///
/// One instance per session; it owns its [`HistoryStore`] and writes the whole history
/// through it after every history mutation.
#[derive(Debug)]
pub struct Accumulator {
    /// Operand being edited (`"0"` when cleared, empty right after an operator).
    current: String,
    /// Left-hand operand, empty when no operator is pending.
    previous: String,
    /// Operator waiting for the right-hand operand.
    pending: Option<Operator>,
    /// Most-recent-first records, at most [`HISTORY_CAP`].
    history: Vec<String>,
    /// Current mode.
    mode: Mode,
    /// Optional fixed number of decimal places for results.
    precision: Option<u8>,
    /// Persistence backend.
    store: Box<dyn HistoryStore>,
}

impl Accumulator {
    /// What: Create an accumulator in Entry mode with history loaded from `store`.
    ///
    /// Inputs:
    /// - `store`: Persistence backend; absent/unparsable data yields an empty history.
    ///
    /// Output:
    /// - Accumulator with `current = "0"`, no pending operator.
    ///
    /// Details:
    /// - Loaded histories longer than [`HISTORY_CAP`] are truncated to the newest entries.
    #[must_use]
    pub fn new(store: Box<dyn HistoryStore>) -> Self {
        let mut history = store.load().unwrap_or_default();
        if history.len() > HISTORY_CAP {
            tracing::debug!(
                loaded = history.len(),
                cap = HISTORY_CAP,
                "[Accumulator] Truncating loaded history"
            );
            history.truncate(HISTORY_CAP);
        }
        Self {
            current: "0".to_string(),
            previous: String::new(),
            pending: None,
            history,
            mode: Mode::Entry,
            precision: None,
            store,
        }
    }

    /// Round results to `precision` decimal places (`None` keeps raw formatting).
    #[must_use]
    pub fn with_precision(mut self, precision: Option<u8>) -> Self {
        self.precision = precision;
        self
    }

    /// Operand currently being edited or the last result.
    #[must_use]
    pub fn current_operand(&self) -> &str {
        &self.current
    }

    /// Left-hand operand (empty when nothing is pending).
    #[must_use]
    pub fn previous_operand(&self) -> &str {
        &self.previous
    }

    /// Operator awaiting its right-hand operand.
    #[must_use]
    pub const fn pending_operator(&self) -> Option<Operator> {
        self.pending
    }

    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// History records, most recent first.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// What: Text for the line above the current operand.
    ///
    /// Output:
    /// - `previous` followed by ` {symbol}` when an operator is pending, else `previous` alone.
    #[must_use]
    pub fn pending_line(&self) -> String {
        match self.pending {
            Some(op) => format!("{} {}", self.previous, op.symbol()),
            None => self.previous.clone(),
        }
    }

    /// What: Append a digit or decimal point to the current operand.
    ///
    /// Inputs:
    /// - `token`: `'0'..='9'` or `'.'`; anything else is ignored.
    ///
    /// Details:
    /// - A second `.` is ignored.
    /// - A lone `"0"` is replaced by a digit instead of being extended.
    pub fn append_digit(&mut self, token: char) {
        if !(token.is_ascii_digit() || token == '.') {
            tracing::trace!(token = %token, "[Accumulator] Ignoring non-digit token");
            return;
        }
        if token == '.' && self.current.contains('.') {
            return;
        }
        if self.current == "0" && token != '.' {
            self.current.clear();
        }
        self.current.push(token);
        self.mode = self.editing_mode();
    }

    /// What: Select the operator to apply between the current operand and the next one.
    ///
    /// Inputs:
    /// - `op`: Operator to install.
    ///
    /// Output:
    /// - `Ok(())` normally; `Err(CalcError::DivideByZero)` if the implicit compute of a
    ///   chained expression divided by zero (the new operator is still installed).
    ///
    /// # Errors
    /// - See Output.
    ///
    /// Details:
    /// - No-op when the current operand is empty.
    /// - With a previous operand present, first computes the pending pair; that compute
    ///   writes its own history record.
    pub fn choose_operator(&mut self, op: Operator) -> Result<(), CalcError> {
        if self.current.is_empty() {
            return Ok(());
        }
        let outcome = if self.previous.is_empty() {
            Ok(())
        } else {
            self.compute()
        };
        self.pending = Some(op);
        self.previous = std::mem::take(&mut self.current);
        self.mode = Mode::Pending;
        tracing::debug!(op = op.name(), previous = %self.previous, "[Accumulator] Operator chosen");
        outcome
    }

    /// What: Apply the pending operator to the previous and current operands.
    ///
    /// Output:
    /// - `Ok(())` on success or when there is nothing to compute.
    /// - `Err(CalcError::DivideByZero)` when dividing by zero; the accumulator has been reset.
    ///
    /// # Errors
    /// - See Output.
    ///
    /// Details:
    /// - Unparsable operands or a missing operator make this a silent no-op.
    /// - On success a record `"{prev} {symbol} {current} = {result}"` is prepended to the
    ///   history (capped at [`HISTORY_CAP`]) and persisted.
    pub fn compute(&mut self) -> Result<(), CalcError> {
        let (Some(prev), Some(current)) =
            (parse_operand(&self.previous), parse_operand(&self.current))
        else {
            return Ok(());
        };
        let Some(op) = self.pending else {
            return Ok(());
        };
        if op == Operator::Divide && current == 0.0 {
            tracing::warn!(previous = %self.previous, "[Accumulator] Division by zero; resetting");
            self.clear();
            return Err(CalcError::DivideByZero);
        }

        let result = format_result(op.apply(prev, current), self.precision);
        let record = format!(
            "{} {} {} = {}",
            format_number(prev),
            op.symbol(),
            format_number(current),
            result
        );
        tracing::debug!(record = %record, "[Accumulator] Computed");
        self.push_history(record);

        self.current = result;
        self.previous.clear();
        self.pending = None;
        self.mode = Mode::Result;
        Ok(())
    }

    /// What: Remove the last character of the current operand.
    ///
    /// Details:
    /// - A one-character (or empty) operand becomes `"0"`, never empty.
    pub fn backspace(&mut self) {
        if self.current.chars().count() > 1 {
            self.current.pop();
        } else {
            self.current = "0".to_string();
        }
        self.mode = self.editing_mode();
    }

    /// Reset operands and operator. History is kept.
    pub fn clear(&mut self) {
        self.current = "0".to_string();
        self.previous.clear();
        self.pending = None;
        self.mode = Mode::Entry;
    }

    /// Empty the history and persist the empty list.
    pub fn clear_history(&mut self) {
        self.history.clear();
        tracing::info!("[Accumulator] History cleared");
        self.persist();
    }

    /// Prepend a record, enforce the cap, and persist.
    fn push_history(&mut self, record: String) {
        self.history.insert(0, record);
        self.history.truncate(HISTORY_CAP);
        self.persist();
    }

    /// Write the full history; failures are logged and otherwise ignored.
    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.history) {
            tracing::warn!(error = %e, "[Persist] Failed to save history");
        }
    }

    /// Mode after an edit of the current operand.
    const fn editing_mode(&self) -> Mode {
        if self.pending.is_some() {
            Mode::Pending
        } else {
            Mode::Entry
        }
    }
}
