//! In-memory profile storage.

use std::sync::Arc;

use loopcast_core::Profile;

use crate::ProfileStore;

/// Serves a fixed list of profiles.
#[derive(Debug, Clone, Default)]
pub struct MemoryProfileStore {
    profiles: Arc<Vec<Profile>>,
}

impl MemoryProfileStore {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self {
            profiles: Arc::new(profiles),
        }
    }
}

impl ProfileStore for MemoryProfileStore {
    fn profiles(&self) -> color_eyre::eyre::Result<Vec<Profile>> {
        Ok(self.profiles.as_ref().clone())
    }
}
