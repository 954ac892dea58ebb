//! Error taxonomy for validation failures.

use thiserror::Error;

/// Missing or malformed APNs deployment settings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("missing {0} setting")]
    MissingSetting(&'static str),
    #[error("{setting} must be exactly {expected} characters, got {actual}")]
    InvalidLength {
        setting: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Missing or malformed device registration data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("no profile found")]
    NoProfile,
    #[error("profile has no loopSettings")]
    MissingLoopSettings,
    #[error("profile loopSettings is missing {0}")]
    MissingField(&'static str),
}

/// Missing or malformed event fields, or an event type with no mapping.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("missing eventType")]
    MissingEventType,
    #[error("unhandled event type: {0:?}")]
    UnhandledEventType(String),
    #[error("missing {0}")]
    MissingField(&'static str),
    #[error("incorrect {field}: {value:?}")]
    InvalidField {
        field: &'static str,
        value: String,
    },
}
