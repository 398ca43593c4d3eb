use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - The sender half is handed to the event thread; when no thread is spawned (headless)
///   it is dropped and the event loop sees a closed channel.
pub struct Channels {
    /// Terminal events read by the event thread.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set on exit so the event thread stops polling.
    pub event_thread_cancelled: Arc<AtomicBool>,
}

impl Channels {
    /// What: Create the event channel.
    ///
    /// Output:
    /// - `Channels` plus the event sender to pass to [`spawn_event_thread`].
    pub fn new() -> (Self, mpsc::UnboundedSender<CEvent>) {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let event_thread_cancelled = Arc::new(AtomicBool::new(false));
        (
            Self {
                event_rx,
                event_thread_cancelled,
            },
            event_tx,
        )
    }
}

/// What: Spawn the blocking crossterm reader thread.
///
/// Inputs:
/// - `headless`: When `true`, no thread is spawned and `event_tx` is dropped.
/// - `event_tx`: Sender that receives terminal events.
/// - `cancelled`: Flag checked between polls.
///
/// Details:
/// - Polls with a 50ms timeout so the cancel flag is honored promptly.
/// - Exits when the flag is set or the receiver is gone.
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, "[Runtime] Transient event read error");
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    tracing::debug!(error = %e, "[Runtime] Event poll error");
                }
            }
        }
        tracing::debug!("[Runtime] Event thread exiting");
    });
}
