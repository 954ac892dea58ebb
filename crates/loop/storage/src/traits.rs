//! Storage traits.

use loopcast_core::Profile;

/// Profile storage operations.
pub trait ProfileStore: Send + Sync {
    /// All stored profiles, most relevant first.
    fn profiles(&self) -> color_eyre::eyre::Result<Vec<Profile>>;
}
