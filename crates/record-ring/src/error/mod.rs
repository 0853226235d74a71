use record_ring_core::ControlError;

use std::{panic::Location, result::Result as StdResult};

use error_location::ErrorLocation;
use thiserror::Error;

/// Application-level errors for the record-ring binary.
///
/// All variants include `ErrorLocation` for call-site tracking.
#[derive(Error, Debug)]
pub enum AppError {
    /// Control construction error from record-ring-core.
    #[error("Control error: {source} {location}")]
    Control {
        /// The underlying control error.
        #[source]
        source: ControlError,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// Configuration loading or saving error.
    #[error("Configuration error: {reason} {location}")]
    ConfigError {
        /// Human-readable reason for failure.
        reason: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// A theme color string could not be parsed.
    #[error("Invalid color {name}: {value:?} {location}")]
    InvalidColor {
        /// Which theme entry was rejected.
        name: &'static str,
        /// The offending string.
        value: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// The requested gesture scenario does not exist.
    #[error("Unknown scenario: {name:?} {location}")]
    UnknownScenario {
        /// The requested scenario name.
        name: String,
        /// Location where this error was created.
        location: ErrorLocation,
    },

    /// IO error from filesystem operations.
    #[error("IO error: {source} {location}")]
    IoError {
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
        /// Location where this error was created.
        location: ErrorLocation,
    },
}

// Manual From<ControlError> with location tracking.
// Cannot use #[from] because it does not support extra fields.
impl From<ControlError> for AppError {
    #[track_caller]
    fn from(source: ControlError) -> Self {
        AppError::Control {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<std::io::Error> for AppError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        AppError::IoError {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convenience type alias for Results using `AppError`.
pub type Result<T> = StdResult<T, AppError>;
