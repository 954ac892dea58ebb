//! Outbound payload and notification types.

use std::collections::BTreeMap;

/// Interruption level set on every Loop notification.
pub const TIME_SENSITIVE: &str = "time-sensitive";

/// Payload keys read by the Loop app.
pub mod key {
    pub const REMOTE_ADDRESS: &str = "remote-address";
    pub const SENT_AT: &str = "sent-at";
    pub const EXPIRATION: &str = "expiration";
    pub const NOTES: &str = "notes";
    pub const ENTERED_BY: &str = "entered-by";
    pub const CANCEL_TEMPORARY_OVERRIDE: &str = "cancel-temporary-override";
    pub const OVERRIDE_NAME: &str = "override-name";
    pub const OVERRIDE_DURATION_MINUTES: &str = "override-duration-minutes";
    pub const CARBS_ENTRY: &str = "carbs-entry";
    pub const ABSORPTION_TIME: &str = "absorption-time";
    pub const START_TIME: &str = "start-time";
    pub const BOLUS_ENTRY: &str = "bolus-entry";
    pub const OTP: &str = "otp";
}

/// A scalar payload value.
#[derive(Debug, Clone, PartialEq)]
pub enum PayloadValue {
    Text(String),
    Integer(u64),
    Number(f64),
}

/// Largest magnitude at which every whole `f64` is exact.
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

impl serde::Serialize for PayloadValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(text) => serializer.serialize_str(text),
            Self::Integer(n) => serializer.serialize_u64(*n),
            // Whole amounts go out as JSON integers: `40`, not `40.0`.
            Self::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_EXACT_FLOAT => {
                serializer.serialize_i64(*n as i64)
            }
            Self::Number(n) => serializer.serialize_f64(*n),
        }
    }
}

impl From<&str> for PayloadValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for PayloadValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u64> for PayloadValue {
    fn from(value: u64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for PayloadValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Custom data delivered alongside the alert.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct OutboundPayload(BTreeMap<String, PayloadValue>);

impl OutboundPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, value: impl Into<PayloadValue>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&PayloadValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PayloadValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// A fully built notification, ready to hand to a provider.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Human-readable alert body.
    pub alert: String,
    /// APNs topic (the app bundle identifier).
    pub topic: String,
    /// Always set so the app wakes to process the payload.
    pub content_available: bool,
    pub payload: OutboundPayload,
    /// Always [`TIME_SENSITIVE`].
    pub interruption_level: &'static str,
    /// Expiration in seconds since the unix epoch.
    pub expiry: i64,
}
