//! Library entry for tallybox exposing the calculator core, runtime, and UI for integration tests.

pub mod app;
pub mod events;
pub mod logic;
pub mod state;
pub mod theme;
pub mod ui;
