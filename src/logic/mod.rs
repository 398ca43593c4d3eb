//! Core non-UI logic: the accumulator, its operators, number formatting, and history storage.

pub mod accumulator;
pub mod format;
pub mod operator;
pub mod store;

// Re-export public APIs so callers can use `crate::logic::...` directly
pub use accumulator::{Accumulator, CalcError, HISTORY_CAP, Mode};
pub use format::{format_number, format_result, parse_operand};
pub use operator::Operator;
pub use store::{HISTORY_KEY, HistoryStore, JsonFileStore, MemoryStore, StoreError};
