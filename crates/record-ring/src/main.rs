//! Record-Ring: scripted harness for a press-and-hold record control.

mod app;
mod config;
mod error;
mod observer;
mod script;
#[cfg(test)]
mod tests;

pub(crate) use {
    app::App,
    error::{AppError, Result as AppResult},
    observer::EventLogger,
    script::{GestureScript, ScriptPhase},
};

use crate::config::Config;

use record_ring_core::{CircleBounds, RecordButton};
use tracing::error;

/// Application entry point.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("record_ring=debug,record_ring_core=debug")
        .init();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    let control_config = match config.control_config() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to resolve control config: {:?}", e);
            std::process::exit(1);
        }
    };

    // Scenario from the command line, falling back to the config file.
    let scenario = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.behaviour.scenario.clone());

    let script = match GestureScript::by_name(
        &scenario,
        config.behaviour.button_size,
        control_config.time_limit,
    ) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to resolve scenario: {:?}", e);
            std::process::exit(1);
        }
    };

    let observer = EventLogger::new(config.behaviour.dismiss_on_done);
    let bounds = CircleBounds::centered(config.behaviour.button_size);
    let button = match RecordButton::new(control_config, Box::new(bounds), observer) {
        Ok(b) => b,
        Err(e) => {
            error!("Failed to build control: {:?}", e);
            std::process::exit(1);
        }
    };

    // The control is deliberately !Send; a current-thread runtime keeps
    // ticks and script phases on one control-flow thread.
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to create tokio runtime: {:?}", e);
            std::process::exit(1);
        }
    };

    let app = App { button, script };
    if let Err(e) = runtime.block_on(app.run()) {
        error!(error = ?e, "Harness error");
        std::process::exit(1);
    }
}
