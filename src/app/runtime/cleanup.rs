use std::sync::atomic::Ordering;

use crate::state::AppState;

use super::background::Channels;

/// What: Stop the event thread and log the session summary.
///
/// Details:
/// - History is persisted on every change, so nothing is flushed here.
pub fn cleanup_on_exit(app: &AppState, channels: &Channels) {
    channels.event_thread_cancelled.store(true, Ordering::Relaxed);
    tracing::debug!(
        history = app.calc.history().len(),
        "[Runtime] Main loop exited"
    );
}
