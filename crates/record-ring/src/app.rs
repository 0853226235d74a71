use crate::{AppResult, EventLogger, GestureScript, ScriptPhase};

use std::time::Duration;

use record_ring_core::{RecordButton, TICK_PERIOD};
use tokio::time::{Instant, MissedTickBehavior, interval, sleep_until};
use tracing::{debug, info, instrument};

/// Harness application state.
///
/// The control is single-threaded by design, so the app runs the 60 Hz
/// tick and the scripted gesture phases in one `tokio::select!` loop on
/// a current-thread runtime.
pub struct App {
    pub(crate) button: RecordButton<EventLogger>,
    pub(crate) script: GestureScript,
}

impl App {
    /// Replay the script against the control under a 60 Hz tick.
    ///
    /// Runs until every step has been delivered and the control has left
    /// its recording state.
    #[instrument(skip(self))]
    pub(crate) async fn run(mut self) -> AppResult<()> {
        info!(
            steps = self.script.steps().len(),
            "Record-ring harness starting"
        );

        let started = Instant::now();

        let mut ticker = interval(Duration::from_secs_f32(TICK_PERIOD));
        // A stalled loop drops missed frames instead of replaying them:
        // elapsed recording time is measured in delivered ticks.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut next = 0;
        loop {
            let deadline = self
                .script
                .steps()
                .get(next)
                .map_or(started, |step| started + step.at);

            tokio::select! {
                _ = ticker.tick() => self.button.tick(),
                _ = sleep_until(deadline), if next < self.script.steps().len() => {
                    if let Some(step) = self.script.steps().get(next).copied() {
                        debug!(at = ?step.at, phase = ?step.phase, "script step");
                        self.apply(step.phase);
                    }
                    next += 1;
                }
            }

            if next >= self.script.steps().len() && !self.button.is_recording() {
                break;
            }
        }

        info!(
            events = self.button.observer().events_seen(),
            "script complete"
        );

        Ok(())
    }

    fn apply(&mut self, phase: ScriptPhase) {
        match phase {
            ScriptPhase::Tap => self.button.tap(),
            ScriptPhase::PressBegan => self.button.press_began(),
            ScriptPhase::PressMoved(point) => self.button.press_moved(point),
            ScriptPhase::PressEnded => self.button.press_ended(),
            ScriptPhase::PressCancelled => self.button.press_cancelled(),
        }
    }
}
