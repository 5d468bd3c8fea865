//! Error types for the veranda booking client.

use thiserror::Error;

/// Main error type for veranda operations.
#[derive(Error, Debug)]
pub enum VerandaError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Date range error: {0}")]
    Range(#[from] RangeError),

    #[error("Selection error: {0}")]
    Selection(#[from] SelectionError),

    #[error("Guest count error: {0}")]
    GuestCount(#[from] GuestCountError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Submission error: {0}")]
    Submission(#[from] SubmissionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Date range construction errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    #[error("range must span at least one night (got {nights})")]
    InvalidRange { nights: i64 },
}

/// Rejection reasons for a check-in/check-out selection.
///
/// All of these are expected conditions recovered locally and shown
/// inline; none of them aborts the calendar view.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    #[error("both check-in and check-out dates must be selected")]
    Incomplete,

    #[error("check-out must be after check-in")]
    EndBeforeStart,

    #[error("check-in date is in the past")]
    StartInPast,

    #[error("selected dates overlap an existing reservation")]
    Overlaps,
}

/// Guest count validation errors.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestCountError {
    #[error("at least one guest is required (got {got})")]
    BelowMinimum { got: u32 },

    #[error("guest count {got} exceeds venue capacity of {max}")]
    AboveCapacity { got: u32, max: u32 },
}

/// Venue/reservation fetch errors.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server returned {status}: {message}")]
    Http { status: u16, message: String },

    #[error("malformed venue response: {0}")]
    Malformed(String),
}

/// Booking submission errors.
///
/// `Rejected` carries the server-provided message and covers race losses:
/// another client may have booked the same dates after this client took its
/// reservation snapshot. The caller must refresh availability before
/// retrying; submissions are never retried automatically.
#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("booking rejected by server ({status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Result type alias for veranda operations.
pub type Result<T> = std::result::Result<T, VerandaError>;
