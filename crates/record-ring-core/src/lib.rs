//! Record-ring Core Library
//!
//! Interaction state machine for a press-and-hold record control: a
//! circular button that distinguishes a quick tap from a long press and,
//! while held, drives a radial progress ring toward a configurable time
//! limit. Gesture recognition, layout and drawing stay in the host UI
//! layer; the core consumes discrete gesture phases plus a 60 Hz tick
//! and publishes recording state, progress and [`RecordEvent`]s.
//!
//! # Example
//!
//! ```
//! use record_ring_core::{
//!     ButtonConfig, CircleBounds, CoreResult, DismissAck, RecordButton, RecordEvent,
//!     RecordObserver,
//! };
//!
//! struct Printer;
//!
//! impl RecordObserver for Printer {
//!     fn record_event(&mut self, event: RecordEvent, _ack: DismissAck) {
//!         println!("{:?}", event);
//!     }
//! }
//!
//! fn main() -> CoreResult<()> {
//!     let bounds = CircleBounds::centered(96.0);
//!     let mut button = RecordButton::new(ButtonConfig::default(), Box::new(bounds), Printer)?;
//!
//!     button.press_began();
//!     for _ in 0..30 {
//!         button.tick();
//!     }
//!     button.press_ended();
//!
//!     Ok(())
//! }
//! ```

mod button;
mod error;

pub use {
    button::{
        ButtonConfig, CircleBounds, DismissAck, HitTest, Point, RecordButton, RecordEvent,
        RecordObserver, RecordingState, RectBounds, RingMetrics, Rgba, TICK_PERIOD,
    },
    error::{ControlError, Result as CoreResult},
};

#[cfg(test)]
mod tests;
