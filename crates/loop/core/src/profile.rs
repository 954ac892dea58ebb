//! Device profiles and the push target extracted from them.

use crate::{ProfileError, non_empty};

/// A stored profile. Only the Loop registration is of interest here.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub loop_settings: Option<LoopSettings>,
}

/// Push registration reported by the Loop app.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoopSettings {
    #[serde(default)]
    pub device_token: Option<String>,
    #[serde(default)]
    pub bundle_identifier: Option<String>,
}

/// Device that receives the notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceTarget {
    /// APNs device token.
    pub device_token: String,
    /// App bundle identifier, used as the APNs topic.
    pub bundle_identifier: String,
}

impl DeviceTarget {
    /// Extract the target from the first profile. Later profiles are never consulted.
    pub fn from_profiles(profiles: &[Profile]) -> Result<Self, ProfileError> {
        let profile = profiles.first().ok_or(ProfileError::NoProfile)?;
        let settings = profile
            .loop_settings
            .as_ref()
            .ok_or(ProfileError::MissingLoopSettings)?;

        let device_token = non_empty(settings.device_token.as_deref())
            .ok_or(ProfileError::MissingField("deviceToken"))?;
        let bundle_identifier = non_empty(settings.bundle_identifier.as_deref())
            .ok_or(ProfileError::MissingField("bundleIdentifier"))?;

        Ok(Self {
            device_token: device_token.to_string(),
            bundle_identifier: bundle_identifier.to_string(),
        })
    }
}
