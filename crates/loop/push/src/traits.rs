//! Push notification traits.

use loopcast_core::{DeploymentCredentials, Notification, RawEvent};

use crate::{CompletionResult, DeliveryReport};

/// Push transport bound to one set of credentials.
#[trait_variant::make(Send)]
pub trait Provider: Send + Sync {
    /// Deliver a notification to a single device.
    async fn send(&self, notification: &Notification, device_token: &str) -> DeliveryReport;

    /// Release the transport. Called once, after which `send` is not used.
    fn shutdown(&mut self);
}

/// Builds a fresh [`Provider`] for each delivery.
pub trait Connector: Send + Sync {
    type Provider: Provider;

    /// Create a provider for the given credentials.
    fn connect(
        &self,
        credentials: &DeploymentCredentials,
    ) -> color_eyre::eyre::Result<Self::Provider>;
}

/// High-level notification entry point.
#[trait_variant::make(Send)]
pub trait Notifier: Send + Sync {
    /// Send a remote command and report the outcome to `completion` exactly once.
    async fn send_notification<F>(&self, event: &RawEvent, remote_address: &str, completion: F)
    where
        F: FnOnce(CompletionResult) + Send;
}
