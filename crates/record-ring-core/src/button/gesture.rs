//! Gesture interpreter: maps phase-tagged pointer events onto state
//! machine transitions.
//!
//! Tap versus long-press disambiguation happens in the host UI layer;
//! the control only consumes the resulting discrete phases. Once a press
//! reaches its terminal event, later phases of the same press are
//! no-ops: a cycle ends exactly once.

use crate::{
    RecordEvent, RecordObserver,
    button::{event::StopReason, geometry::Point, machine::RecordButton},
};

use tracing::debug;

impl<O: RecordObserver> RecordButton<O> {
    /// A quick tap completed.
    ///
    /// Emits [`RecordEvent::Click`]; recording state and progress are
    /// untouched. The host's recognizer guarantees taps never interleave
    /// with an active press cycle.
    pub fn tap(&mut self) {
        debug!("tap");
        self.emit(RecordEvent::Click);
    }

    /// A long press was recognized.
    pub fn press_began(&mut self) {
        self.start();
    }

    /// The held pointer moved to `point`.
    ///
    /// Inside the hit region this emits the informational
    /// [`RecordEvent::LongPressMoving`]; outside it cancels the cycle.
    /// Ignored once the press has already ended.
    pub fn press_moved(&mut self, point: Point) {
        if !self.state.is_active() {
            return;
        }

        if self.hit.contains_point(point) {
            self.emit(RecordEvent::LongPressMoving);
        } else {
            debug!(x = point.x, y = point.y, "pointer left the hit region");
            self.stop(StopReason::Cancel);
        }
    }

    /// The press was released.
    ///
    /// Completes the cycle with [`RecordEvent::LongPressDone`] unless it
    /// already ended (cancelled mid-drag, or auto-completed at the limit).
    pub fn press_ended(&mut self) {
        self.stop(StopReason::Done);
    }

    /// The host cancelled the gesture (e.g. a system interruption).
    pub fn press_cancelled(&mut self) {
        self.stop(StopReason::Cancel);
    }
}
