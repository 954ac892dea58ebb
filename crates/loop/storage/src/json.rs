//! JSON file profile storage.

use std::path::PathBuf;

use color_eyre::eyre::WrapErr as _;
use loopcast_core::Profile;

use crate::ProfileStore;

/// Reads a JSON array of profiles from disk on every call, so edits to the
/// file take effect without a restart.
#[derive(Debug, Clone)]
pub struct JsonProfileStore {
    path: PathBuf,
}

impl JsonProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProfileStore for JsonProfileStore {
    fn profiles(&self) -> color_eyre::eyre::Result<Vec<Profile>> {
        let content = std::fs::read_to_string(&self.path)
            .wrap_err_with(|| format!("failed to read profiles from {}", self.path.display()))?;

        let profiles: Vec<Profile> = serde_json::from_str(&content)
            .wrap_err_with(|| format!("failed to parse profiles in {}", self.path.display()))?;

        tracing::debug!(path = %self.path.display(), count = profiles.len(), "loaded profiles");
        Ok(profiles)
    }
}
