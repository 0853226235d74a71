mod behaviour_config;
mod button_config;
#[allow(clippy::module_inception)]
mod config;
mod theme_config;

pub(crate) use {
    behaviour_config::BehaviourConfig,
    button_config::ButtonConfig,
    config::Config,
    theme_config::{ThemeConfig, parse_color},
};

pub(crate) const DEFAULT_TIME_LIMIT: f32 = 15.0;
pub(crate) const DEFAULT_BUTTON_SIZE: f32 = 96.0;
pub(crate) const DEFAULT_SCENARIO: &str = "complete";

pub(crate) fn default_time_limit() -> f32 {
    DEFAULT_TIME_LIMIT
}

pub(crate) fn default_outer_ring_scale() -> f32 {
    0.8
}

pub(crate) fn default_center_disc_scale() -> f32 {
    0.5
}

pub(crate) fn default_center_disc_recording_scale() -> f32 {
    0.3
}

pub(crate) fn default_progress_width_scale() -> f32 {
    0.1
}

pub(crate) fn default_button_size() -> f32 {
    DEFAULT_BUTTON_SIZE
}

pub(crate) fn default_scenario() -> String {
    DEFAULT_SCENARIO.to_string()
}
