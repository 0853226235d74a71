mod clock;
mod config;
mod event;
mod gesture;
mod geometry;
mod machine;
mod protocol;
mod state;

#[cfg(test)]
pub(crate) use clock::{ClockPhase, TickClock};

pub use {
    clock::TICK_PERIOD,
    config::{ButtonConfig, Rgba},
    event::RecordEvent,
    geometry::{CircleBounds, HitTest, Point, RectBounds, RingMetrics},
    machine::RecordButton,
    protocol::{DismissAck, RecordObserver},
    state::RecordingState,
};
