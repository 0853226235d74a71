use crate::config::{default_button_size, default_scenario};

use serde::{Deserialize, Serialize};

/// Harness behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviourConfig {
    /// Control size in points; also sizes the circular hit region.
    #[serde(default = "default_button_size")]
    pub button_size: f32,
    /// Whether the harness dismisses the clock after a completed recording.
    #[serde(default)]
    pub dismiss_on_done: bool,
    /// Scenario replayed when none is given on the command line.
    #[serde(default = "default_scenario")]
    pub scenario: String,
}

impl Default for BehaviourConfig {
    fn default() -> Self {
        Self {
            button_size: default_button_size(),
            dismiss_on_done: false,
            scenario: default_scenario(),
        }
    }
}
