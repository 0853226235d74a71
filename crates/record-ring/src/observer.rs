//! Event consumer for the harness.
//!
//! Logs everything the control emits and applies the configured
//! acknowledgment policy. Real hosts would start and stop their capture
//! pipeline here.

use record_ring_core::{DismissAck, RecordEvent, RecordObserver, RecordingState};

use tracing::{info, trace};

/// Logs record events and optionally dismisses the clock on completion.
pub struct EventLogger {
    dismiss_on_done: bool,
    events_seen: usize,
}

impl EventLogger {
    /// Create a logger with the given dismissal policy.
    pub fn new(dismiss_on_done: bool) -> Self {
        Self {
            dismiss_on_done,
            events_seen: 0,
        }
    }

    /// Number of events observed so far.
    pub fn events_seen(&self) -> usize {
        self.events_seen
    }
}

impl RecordObserver for EventLogger {
    fn record_event(&mut self, event: RecordEvent, ack: DismissAck) {
        self.events_seen += 1;
        info!(?event, "record event");

        if self.dismiss_on_done && event == RecordEvent::LongPressDone {
            info!("dismissing clock after completed recording");
            ack.respond(true);
        }
        // Dropping the ack unanswered is the default no-dismissal path.
    }

    fn redraw_requested(&mut self, state: &RecordingState) {
        trace!(
            progress = state.progress(),
            active = state.is_active(),
            "redraw requested"
        );
    }
}
