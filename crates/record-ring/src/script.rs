//! Scripted gesture timelines replayed against the control.
//!
//! The harness has no real pointer, so gesture recognition is simulated:
//! each scenario is a sorted list of phase events with offsets from
//! script start.

use crate::{AppError, AppResult};

use std::{panic::Location, time::Duration};

use error_location::ErrorLocation;
use record_ring_core::Point;

/// One discrete gesture phase the script can deliver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptPhase {
    /// A completed quick tap.
    Tap,
    /// A long press was recognized.
    PressBegan,
    /// The held pointer moved to a location.
    PressMoved(Point),
    /// The press was released.
    PressEnded,
    /// Host-level gesture cancellation.
    PressCancelled,
}

/// One timed entry in a gesture script.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptStep {
    /// Offset from script start.
    pub at: Duration,
    /// The phase delivered at that moment.
    pub phase: ScriptPhase,
}

impl ScriptStep {
    fn new(at: Duration, phase: ScriptPhase) -> Self {
        Self { at, phase }
    }
}

/// A replayable gesture timeline, ordered by offset.
#[derive(Debug, Clone)]
pub struct GestureScript {
    steps: Vec<ScriptStep>,
}

impl GestureScript {
    /// Build a script, ordering steps by their offset.
    pub fn new(mut steps: Vec<ScriptStep>) -> Self {
        steps.sort_by_key(|step| step.at);
        Self { steps }
    }

    /// The ordered steps.
    pub fn steps(&self) -> &[ScriptStep] {
        &self.steps
    }

    /// Look up a built-in scenario by name.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UnknownScenario`] for anything other than
    /// `complete`, `cancel`, `tap` or `interrupted`.
    #[track_caller]
    pub fn by_name(name: &str, button_size: f32, time_limit: f32) -> AppResult<Self> {
        match name {
            "complete" => Ok(Self::complete(button_size, time_limit)),
            "cancel" => Ok(Self::cancel_drag(button_size)),
            "tap" => Ok(Self::tap()),
            "interrupted" => Ok(Self::interrupted()),
            _ => Err(AppError::UnknownScenario {
                name: name.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    /// Hold past the limit so the clock auto-completes the recording.
    ///
    /// The trailing release lands after completion and must be a no-op.
    pub fn complete(button_size: f32, time_limit: f32) -> Self {
        let center = Point::new(button_size / 2.0, button_size / 2.0);
        Self::new(vec![
            ScriptStep::new(Duration::from_millis(250), ScriptPhase::PressBegan),
            ScriptStep::new(Duration::from_millis(750), ScriptPhase::PressMoved(center)),
            ScriptStep::new(
                Duration::from_millis(250) + Duration::from_secs_f32(time_limit + 0.5),
                ScriptPhase::PressEnded,
            ),
        ])
    }

    /// Drag outside the hit region mid-press, cancelling the recording.
    pub fn cancel_drag(button_size: f32) -> Self {
        let center = Point::new(button_size / 2.0, button_size / 2.0);
        let outside = Point::new(button_size * 2.0, button_size * 2.0);
        Self::new(vec![
            ScriptStep::new(Duration::from_millis(250), ScriptPhase::PressBegan),
            ScriptStep::new(Duration::from_millis(750), ScriptPhase::PressMoved(center)),
            ScriptStep::new(Duration::from_millis(1250), ScriptPhase::PressMoved(outside)),
            ScriptStep::new(Duration::from_millis(1500), ScriptPhase::PressEnded),
        ])
    }

    /// A single quick tap; no press cycle at all.
    pub fn tap() -> Self {
        Self::new(vec![ScriptStep::new(
            Duration::from_millis(250),
            ScriptPhase::Tap,
        )])
    }

    /// A press torn down by a host-level interruption.
    pub fn interrupted() -> Self {
        Self::new(vec![
            ScriptStep::new(Duration::from_millis(250), ScriptPhase::PressBegan),
            ScriptStep::new(Duration::from_millis(1250), ScriptPhase::PressCancelled),
        ])
    }
}
