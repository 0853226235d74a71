use crate::{ControlError, CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// An RGBA color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
    /// Alpha component.
    pub a: f32,
}

impl Rgba {
    /// Construct a color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Default outer ring color.
    pub const LIGHT_GRAY: Self = Self::new(2.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0, 1.0);
    /// Default center disc color.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Default progress arc color.
    pub const ORANGE: Self = Self::new(1.0, 0.5, 0.0, 1.0);
    /// Default background.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    fn in_range(&self) -> bool {
        [self.r, self.g, self.b, self.a]
            .iter()
            .all(|c| c.is_finite() && (0.0..=1.0).contains(c))
    }
}

/// Configuration of a record control. All fields have defaults.
///
/// Geometry scale factors are fractions of the control's overall size;
/// see [`RingMetrics`] for how they resolve to radii.
///
/// [`RingMetrics`]: crate::RingMetrics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonConfig {
    /// Recording time limit, in time units. Default 15.
    pub time_limit: f32,
    /// Outer ring fill color.
    pub outer_ring_color: Rgba,
    /// Center disc fill color.
    pub center_disc_color: Rgba,
    /// Progress arc stroke color.
    pub progress_color: Rgba,
    /// Background behind the layers.
    pub background_color: Rgba,
    /// Outer ring diameter while idle, as a fraction of size. Default 0.8.
    pub outer_ring_scale: f32,
    /// Center disc diameter while idle, as a fraction of size. Default 0.5.
    pub center_disc_scale: f32,
    /// Center disc diameter while recording. Default 0.3.
    pub center_disc_recording_scale: f32,
    /// Progress ring stroke width, as a fraction of size. Default 0.1.
    pub progress_width_scale: f32,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            time_limit: 15.0,
            outer_ring_color: Rgba::LIGHT_GRAY,
            center_disc_color: Rgba::WHITE,
            progress_color: Rgba::ORANGE,
            background_color: Rgba::TRANSPARENT,
            outer_ring_scale: 0.8,
            center_disc_scale: 0.5,
            center_disc_recording_scale: 0.3,
            progress_width_scale: 0.1,
        }
    }
}

impl ButtonConfig {
    /// Reject configurations the control cannot operate under.
    ///
    /// Runs once at construction; after that no core operation can fail.
    #[track_caller]
    pub(crate) fn validate(&self) -> CoreResult<()> {
        if !self.time_limit.is_finite() || self.time_limit <= 0.0 {
            return Err(ControlError::InvalidTimeLimit {
                value: self.time_limit,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let scales = [
            ("outer_ring_scale", self.outer_ring_scale),
            ("center_disc_scale", self.center_disc_scale),
            (
                "center_disc_recording_scale",
                self.center_disc_recording_scale,
            ),
            ("progress_width_scale", self.progress_width_scale),
        ];
        for (name, value) in scales {
            if !value.is_finite() || value <= 0.0 || value > 1.0 {
                return Err(ControlError::InvalidScale {
                    name,
                    value,
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        let colors = [
            ("outer_ring_color", self.outer_ring_color),
            ("center_disc_color", self.center_disc_color),
            ("progress_color", self.progress_color),
            ("background_color", self.background_color),
        ];
        for (name, color) in colors {
            if !color.in_range() {
                return Err(ControlError::InvalidColor {
                    name,
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        Ok(())
    }
}
