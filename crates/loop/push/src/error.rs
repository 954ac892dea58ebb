//! Dispatch errors.

use loopcast_core::{ConfigurationError, EventError, ProfileError};
use thiserror::Error;

/// Every way a dispatch can fail. Renders as a single line for the caller.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Loop notification failed: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("Loop notification failed: {0}")]
    Profile(#[from] ProfileError),
    #[error("Loop notification failed: {0}")]
    Event(#[from] EventError),
    #[error("APNs delivery failed: {0}")]
    Rejected(String),
    #[error("Loop notification failed: {0:#}")]
    Unexpected(color_eyre::Report),
}

impl From<color_eyre::Report> for DispatchError {
    fn from(report: color_eyre::Report) -> Self {
        Self::Unexpected(report)
    }
}
