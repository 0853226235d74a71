use crate::{
    RecordEvent, RecordingState,
    button::clock::{ClockPhase, TickClock},
};

use std::{cell::Cell, rc::Rc};

use tracing::debug;

/// Single-use acknowledgment attached to every emitted [`RecordEvent`].
///
/// The consumer may answer at most once (enforced by move semantics),
/// either synchronously inside [`RecordObserver::record_event`] or later
/// from stored state. Answering with `dismiss == true` permanently
/// invalidates the clock resource the event was emitted under; dropping
/// the ack unanswered is the default and leaves the clock untouched.
///
/// An ack refers to the clock of its own emission: if the control has
/// since replaced a dismissed clock, a stale ack has no effect on the
/// replacement.
#[derive(Debug)]
pub struct DismissAck {
    clock: Rc<Cell<ClockPhase>>,
}

impl DismissAck {
    pub(crate) fn new(clock: &TickClock) -> Self {
        Self {
            clock: clock.phase_cell(),
        }
    }

    /// Answer the acknowledgment, consuming it.
    ///
    /// `dismiss == true` tears the clock down for good; `false` is an
    /// explicit "keep going" and changes nothing.
    pub fn respond(self, dismiss: bool) {
        if dismiss {
            debug!("consumer dismissed the tick clock");
            self.clock.set(ClockPhase::Invalidated);
        }
    }
}

/// Receives interaction events and redraw requests from a control.
///
/// All callbacks run synchronously on the control-flow thread that
/// delivered the triggering gesture or tick, and complete before the
/// next event is processed.
pub trait RecordObserver {
    /// An interaction outcome, paired with its one-shot acknowledgment.
    fn record_event(&mut self, event: RecordEvent, ack: DismissAck);

    /// Raised whenever published progress or the active flag changes.
    ///
    /// The default implementation ignores the signal; visual hosts
    /// override it to schedule a redraw from `state`.
    fn redraw_requested(&mut self, state: &RecordingState) {
        let _ = state;
    }
}
