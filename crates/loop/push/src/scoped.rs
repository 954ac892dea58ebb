//! Provider ownership scoped to one delivery.

use crate::Provider;

/// Owns a provider and shuts it down when dropped, on every exit path.
pub struct ScopedProvider<P: Provider> {
    provider: P,
}

impl<P: Provider> ScopedProvider<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

impl<P: Provider> std::ops::Deref for ScopedProvider<P> {
    type Target = P;

    fn deref(&self) -> &P {
        &self.provider
    }
}

impl<P: Provider> Drop for ScopedProvider<P> {
    fn drop(&mut self) {
        self.provider.shutdown();
    }
}
