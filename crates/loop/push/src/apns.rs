//! APNs provider using the a2 crate.

use color_eyre::eyre::WrapErr as _;
use loopcast_core::{DeploymentCredentials, Notification, OutboundPayload, PushEnvironment};

use crate::{Connector, DeliveryReport, Provider};

/// Builds token-authenticated [`ApnsProvider`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApnsConnector;

impl Connector for ApnsConnector {
    type Provider = ApnsProvider;

    fn connect(
        &self,
        credentials: &DeploymentCredentials,
    ) -> color_eyre::eyre::Result<ApnsProvider> {
        ApnsProvider::new(credentials)
    }
}

/// APNs provider using token (.p8 key) authentication.
pub struct ApnsProvider {
    client: Option<a2::Client>,
    environment: PushEnvironment,
}

impl ApnsProvider {
    /// Create a provider for the endpoint selected by the credentials.
    pub fn new(credentials: &DeploymentCredentials) -> color_eyre::eyre::Result<Self> {
        let key = unescape_newlines(&credentials.key);
        let pem_data = ::pem::parse(&key)
            .map_err(|e| color_eyre::eyre::eyre!("failed to parse APNs key PEM: {}", e))?;

        if pem_data.tag() != "PRIVATE KEY" {
            color_eyre::eyre::bail!("APNs key is not a PKCS#8 private key, got: {}", pem_data.tag());
        }

        let endpoint = match credentials.environment {
            PushEnvironment::Production => a2::Endpoint::Production,
            PushEnvironment::Sandbox => a2::Endpoint::Sandbox,
        };

        let mut cursor = std::io::Cursor::new(key.as_bytes());
        let client = a2::Client::token(
            &mut cursor,
            credentials.key_id.as_str(),
            credentials.team_id.as_str(),
            a2::ClientConfig::new(endpoint),
        )
        .wrap_err("failed to create APNs client")?;

        tracing::debug!(environment = %credentials.environment, "APNs provider created");

        Ok(Self {
            client: Some(client),
            environment: credentials.environment,
        })
    }
}

impl Provider for ApnsProvider {
    async fn send(&self, notification: &Notification, device_token: &str) -> DeliveryReport {
        let Some(client) = &self.client else {
            return DeliveryReport::rejected(
                device_token,
                None,
                Some("provider has been shut down".to_string()),
            );
        };

        let apns_id = uuid::Uuid::new_v4().to_string();
        let body = ApnsBody::new(notification, device_token, &apns_id);

        let result = client.send(body).await;
        if let Ok(response) = &result {
            tracing::debug!(apns_id = %apns_id, code = response.code, "APNs accepted notification");
        }

        delivery_report(result, device_token)
    }

    fn shutdown(&mut self) {
        if self.client.take().is_some() {
            tracing::debug!(environment = %self.environment, "APNs provider shut down");
        }
    }
}

/// Translate an APNs send result into a per-device report.
fn delivery_report(
    result: Result<a2::response::Response, a2::Error>,
    device_token: &str,
) -> DeliveryReport {
    match result {
        Ok(_) => DeliveryReport::accepted(device_token),
        Err(a2::Error::ResponseError(response)) => {
            // ErrorReason has no Display; its Debug form is the APNs reason string.
            let reason = response.error.map(|body| format!("{:?}", body.reason));
            DeliveryReport::rejected(device_token, Some(response.code), reason)
        }
        Err(e) => DeliveryReport::rejected(device_token, None, Some(e.to_string())),
    }
}

/// The `aps` dictionary. a2's own builder cannot set `interruption-level`.
#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
struct Aps<'a> {
    alert: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    content_available: Option<u8>,
    interruption_level: &'a str,
}

/// Request body sent to APNs: `aps` plus the payload entries at the top level.
#[derive(Debug, serde::Serialize)]
struct ApnsBody<'a> {
    aps: Aps<'a>,
    #[serde(flatten)]
    data: &'a OutboundPayload,
    #[serde(skip)]
    device_token: &'a str,
    #[serde(skip)]
    options: a2::NotificationOptions<'a>,
}

impl<'a> ApnsBody<'a> {
    fn new(notification: &'a Notification, device_token: &'a str, apns_id: &'a str) -> Self {
        Self {
            aps: Aps {
                alert: &notification.alert,
                content_available: notification.content_available.then_some(1),
                interruption_level: notification.interruption_level,
            },
            data: &notification.payload,
            device_token,
            options: a2::NotificationOptions {
                apns_id: Some(apns_id),
                apns_push_type: Some(a2::PushType::Alert),
                apns_priority: Some(a2::Priority::High),
                apns_expiration: Some(notification.expiry.max(0) as u64),
                apns_topic: Some(&notification.topic),
                ..Default::default()
            },
        }
    }
}

impl a2::request::payload::PayloadLike for ApnsBody<'_> {
    fn get_device_token(&self) -> &str {
        self.device_token
    }

    fn get_options(&self) -> &a2::NotificationOptions<'_> {
        &self.options
    }
}

/// Keys passed through environment variables often carry literal `\n`.
fn unescape_newlines(key: &str) -> String {
    key.replace("\\n", "\n")
}
