use crate::{
    ButtonConfig, CoreResult, RecordEvent, RecordObserver, RecordingState,
    button::{
        clock::{TICK_PERIOD, TickClock},
        event::StopReason,
        geometry::HitTest,
        protocol::DismissAck,
    },
};

use tracing::{debug, info, instrument, trace};
use uuid::Uuid;

/// Press-and-hold record control: the progress clock and state machine.
///
/// Owns the recording state and the periodic tick resource, and turns
/// `start`/`stop`/`tick` requests into state transitions, progress values
/// and [`RecordEvent`] notifications. Gesture phase entry points live in
/// the gesture interpreter `impl` block alongside this one.
///
/// # Concurrency
///
/// RecordButton is single-threaded and cooperative by design: gesture
/// phases and clock ticks must be delivered on one control-flow thread,
/// and every operation runs to completion before the next is processed.
/// There is no locking and the type is deliberately `!Send`.
///
/// # Failure semantics
///
/// Construction validates the configuration and is the only fallible
/// operation. Afterwards invalid calls (a `tick` after the press ended, a
/// second `start` mid-press) are defined as no-ops, never errors.
pub struct RecordButton<O: RecordObserver> {
    pub(crate) config: ButtonConfig,
    pub(crate) state: RecordingState,
    pub(crate) clock: Option<TickClock>,
    pub(crate) hit: Box<dyn HitTest>,
    pub(crate) observer: O,
    /// Unique id of the in-flight press cycle, for log correlation.
    pub(crate) cycle: Option<Uuid>,
}

impl<O: RecordObserver> RecordButton<O> {
    /// Create a control with the given configuration, hit region and
    /// event observer.
    ///
    /// # Errors
    ///
    /// Returns [`ControlError`](crate::ControlError) if the configuration
    /// is unusable (non-positive limit, out-of-range scale or color).
    #[track_caller]
    #[instrument(skip(config, hit, observer))]
    pub fn new(config: ButtonConfig, hit: Box<dyn HitTest>, observer: O) -> CoreResult<Self> {
        config.validate()?;

        info!(time_limit = config.time_limit, "RecordButton initialized");

        Ok(Self {
            state: RecordingState::new(config.time_limit),
            config,
            clock: None,
            hit,
            observer,
            cycle: None,
        })
    }

    /// Begin a press cycle: arm the state, resume the clock, emit
    /// [`RecordEvent::LongPressBegin`].
    ///
    /// Calling while a press cycle is already active is a no-op: the
    /// in-flight cycle keeps its elapsed time and the clock is not
    /// started a second time.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        if self.state.is_active() {
            debug!("start ignored: press cycle already active");
            return;
        }

        self.state.arm();
        let cycle = Uuid::new_v4();
        self.cycle = Some(cycle);
        self.ensure_clock().resume();

        info!(cycle = %cycle, limit = self.state.limit(), "recording started");

        self.emit(RecordEvent::LongPressBegin);
        self.request_redraw();
    }

    /// Advance the recording by one tick period.
    ///
    /// Called by the host's periodic tick source (nominally 60 Hz). Does
    /// nothing unless the clock is running: a tick delivered after `stop`
    /// or after a dismissal cannot mutate elapsed time or progress. When
    /// the next period would meet or exceed the limit the cycle completes
    /// with [`RecordEvent::LongPressDone`] instead of advancing.
    pub fn tick(&mut self) {
        if !self.is_ticking() {
            return;
        }

        if self.state.would_complete(TICK_PERIOD) {
            self.stop(StopReason::Done);
            return;
        }

        self.state.advance(TICK_PERIOD);
        trace!(progress = self.state.progress(), "tick");
        self.request_redraw();
    }

    /// End the in-flight press cycle and emit its terminal event.
    ///
    /// No-op unless a cycle is active, which makes a late duplicate stop
    /// (an `ended` phase followed by a stray `cancelled`) harmless.
    #[instrument(skip(self))]
    pub(crate) fn stop(&mut self, reason: StopReason) {
        if !self.state.is_active() {
            return;
        }

        // Pause before anything else: once stop has begun, no tick for
        // this press can re-enter the machine.
        if let Some(clock) = &self.clock {
            clock.pause();
        }

        let elapsed = self.state.elapsed();
        self.state.disarm(reason == StopReason::Cancel);

        if let Some(cycle) = self.cycle.take() {
            info!(cycle = %cycle, ?reason, elapsed, "recording stopped");
        }

        self.emit(reason.into_event());
        self.request_redraw();
    }

    /// Normalized progress toward the time limit, in [0, 1].
    pub fn progress(&self) -> f32 {
        self.state.progress()
    }

    /// Whether a press cycle is currently recording.
    pub fn is_recording(&self) -> bool {
        self.state.is_active()
    }

    /// Whether the clock is currently consuming ticks.
    ///
    /// Hosts may gate their timer on this to avoid firing into a paused
    /// or dismissed control.
    pub fn is_ticking(&self) -> bool {
        self.clock.as_ref().is_some_and(TickClock::is_running)
    }

    /// The published recording state, for driving the visual layer.
    pub fn state(&self) -> &RecordingState {
        &self.state
    }

    /// The control's configuration.
    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    /// The event observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Mutable access to the event observer.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Hand out the current clock, replacing one a consumer dismissed.
    ///
    /// A dismissed clock stays dead (stale acks keep pointing at it)
    /// while later cycles get a fresh resource.
    pub(crate) fn ensure_clock(&mut self) -> &TickClock {
        if self.clock.as_ref().is_none_or(TickClock::is_invalidated) {
            self.clock = Some(TickClock::new());
        }
        self.clock.get_or_insert_with(TickClock::new)
    }

    /// Emit an event through the observer with a fresh acknowledgment.
    pub(crate) fn emit(&mut self, event: RecordEvent) {
        let ack = DismissAck::new(self.ensure_clock());
        debug!(?event, "record event emitted");
        self.observer.record_event(event, ack);
    }

    /// Signal the visual layer that progress or activity changed.
    pub(crate) fn request_redraw(&mut self) {
        self.observer.redraw_requested(&self.state);
    }
}

impl<O: RecordObserver> Drop for RecordButton<O> {
    fn drop(&mut self) {
        // The owner tears the resource down; any acks still outstanding
        // observe a dead clock.
        if let Some(clock) = &self.clock {
            clock.invalidate();
        }
    }
}
