use error_location::ErrorLocation;
use thiserror::Error;

/// Construction-time configuration errors with source location tracking.
///
/// Once a control has been built, no operation on it can fail: invalid
/// transitions degrade to no-ops. A bad configuration is a programmer
/// error and is the single place the core returns `Err`.
#[derive(Error, Debug)]
pub enum ControlError {
    /// Time limit is not a positive, finite duration.
    #[error("Invalid time limit: {value} {location}")]
    InvalidTimeLimit {
        /// The rejected limit value, in time units.
        value: f32,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A geometry scale factor lies outside (0, 1].
    #[error("Invalid scale factor {name}: {value} {location}")]
    InvalidScale {
        /// Name of the offending scale factor.
        name: &'static str,
        /// The rejected scale value.
        value: f32,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A color has a component outside [0, 1].
    #[error("Invalid color {name} {location}")]
    InvalidColor {
        /// Name of the offending color.
        name: &'static str,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`ControlError`].
pub type Result<T> = std::result::Result<T, ControlError>;
