use crate::config::{
    default_center_disc_recording_scale, default_center_disc_scale, default_outer_ring_scale,
    default_progress_width_scale, default_time_limit,
};

use serde::{Deserialize, Serialize};

/// Record control tuning: time limit and geometry scale factors.
///
/// Values are validated by the core when the control is built, not at
/// config load time, so a bad file can still be opened and corrected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ButtonConfig {
    /// Recording time limit, in seconds.
    #[serde(default = "default_time_limit")]
    pub time_limit: f32,
    /// Outer ring diameter while idle, as a fraction of the control size.
    #[serde(default = "default_outer_ring_scale")]
    pub outer_ring_scale: f32,
    /// Center disc diameter while idle, as a fraction of the control size.
    #[serde(default = "default_center_disc_scale")]
    pub center_disc_scale: f32,
    /// Center disc diameter while recording.
    #[serde(default = "default_center_disc_recording_scale")]
    pub center_disc_recording_scale: f32,
    /// Progress ring stroke width, as a fraction of the control size.
    #[serde(default = "default_progress_width_scale")]
    pub progress_width_scale: f32,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            time_limit: default_time_limit(),
            outer_ring_scale: default_outer_ring_scale(),
            center_disc_scale: default_center_disc_scale(),
            center_disc_recording_scale: default_center_disc_recording_scale(),
            progress_width_scale: default_progress_width_scale(),
        }
    }
}
