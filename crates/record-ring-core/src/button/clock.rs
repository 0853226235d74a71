use std::{cell::Cell, rc::Rc};

use tracing::{debug, trace};

/// Time units added to the recording per delivered tick.
///
/// The host tick source is expected to fire at 60 Hz. Elapsed time is
/// measured in delivered ticks rather than wall-clock time, so a stalled
/// host loop pauses the recording rather than jumping it forward.
pub const TICK_PERIOD: f32 = 1.0 / 60.0;

/// Lifecycle phase of the periodic tick resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ClockPhase {
    Paused,
    Running,
    Invalidated,
}

/// Handle to the periodic tick resource.
///
/// The control owns the clock outright and creates it lazily on first
/// use; outstanding [`DismissAck`]s hold a shared view of the phase cell
/// so a consumer can tear the resource down after the fact. Pause and
/// resume are idempotent and never touch elapsed time (that lives on
/// [`RecordingState`]). Invalidation is terminal: an invalidated clock
/// never runs again, and the control replaces it with a fresh resource
/// on the next start.
///
/// [`DismissAck`]: crate::DismissAck
/// [`RecordingState`]: crate::RecordingState
pub(crate) struct TickClock {
    phase: Rc<Cell<ClockPhase>>,
}

impl TickClock {
    /// A fresh clock starts paused; ticks only count while running.
    pub(crate) fn new() -> Self {
        debug!("tick clock created");
        Self {
            phase: Rc::new(Cell::new(ClockPhase::Paused)),
        }
    }

    pub(crate) fn is_running(&self) -> bool {
        self.phase.get() == ClockPhase::Running
    }

    pub(crate) fn is_invalidated(&self) -> bool {
        self.phase.get() == ClockPhase::Invalidated
    }

    /// Resume ticking. No-op on an invalidated clock.
    pub(crate) fn resume(&self) {
        if self.phase.get() == ClockPhase::Paused {
            trace!("tick clock resumed");
            self.phase.set(ClockPhase::Running);
        }
    }

    /// Pause ticking. Idempotent; no-op on an invalidated clock.
    pub(crate) fn pause(&self) {
        if self.phase.get() == ClockPhase::Running {
            trace!("tick clock paused");
            self.phase.set(ClockPhase::Paused);
        }
    }

    /// Tear the resource down for good.
    pub(crate) fn invalidate(&self) {
        if self.phase.get() != ClockPhase::Invalidated {
            debug!("tick clock invalidated");
            self.phase.set(ClockPhase::Invalidated);
        }
    }

    /// Shared view of the phase cell, handed to outstanding acks.
    pub(crate) fn phase_cell(&self) -> Rc<Cell<ClockPhase>> {
        Rc::clone(&self.phase)
    }
}
