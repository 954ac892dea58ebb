//! APNs deployment settings.

use crate::{ConfigurationError, non_empty};

/// Length of an Apple developer team identifier.
pub const TEAM_ID_LENGTH: usize = 10;

/// Setting names as they appear in the environment.
pub mod setting {
    pub const KEY: &str = "LOOP_APNS_KEY";
    pub const KEY_ID: &str = "LOOP_APNS_KEY_ID";
    pub const TEAM_ID: &str = "LOOP_DEVELOPER_TEAM_ID";
    pub const ENVIRONMENT: &str = "LOOP_PUSH_SERVER_ENVIRONMENT";
}

/// APNs settings exactly as configured. Validated on every use.
#[derive(Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ApnsSettings {
    /// Token signing key (PKCS#8 PEM).
    #[serde(default)]
    pub key: Option<String>,
    /// Identifier of the signing key.
    #[serde(default)]
    pub key_id: Option<String>,
    /// Apple developer team identifier.
    #[serde(default)]
    pub team_id: Option<String>,
    /// `"production"` selects the production gateway, anything else sandbox.
    #[serde(default)]
    pub environment: Option<String>,
}

impl std::fmt::Debug for ApnsSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApnsSettings")
            .field("key", &self.key.as_ref().map(|_| "<redacted>"))
            .field("key_id", &self.key_id)
            .field("team_id", &self.team_id)
            .field("environment", &self.environment)
            .finish()
    }
}

/// Which APNs gateway to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushEnvironment {
    Production,
    Sandbox,
}

impl PushEnvironment {
    fn from_setting(value: Option<&str>) -> Self {
        match value {
            Some("production") => Self::Production,
            _ => Self::Sandbox,
        }
    }
}

impl std::fmt::Display for PushEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Production => write!(f, "production"),
            Self::Sandbox => write!(f, "sandbox"),
        }
    }
}

/// Validated credentials for token-based APNs authentication.
#[derive(Clone, PartialEq, Eq)]
pub struct DeploymentCredentials {
    pub key: String,
    pub key_id: String,
    pub team_id: String,
    pub environment: PushEnvironment,
}

impl std::fmt::Debug for DeploymentCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeploymentCredentials")
            .field("key", &"<redacted>")
            .field("key_id", &self.key_id)
            .field("team_id", &self.team_id)
            .field("environment", &self.environment)
            .finish()
    }
}

impl ApnsSettings {
    /// Validate the settings into credentials.
    ///
    /// Key, key id and team id must be non-empty; the team id must be exactly
    /// [`TEAM_ID_LENGTH`] characters.
    pub fn credentials(&self) -> Result<DeploymentCredentials, ConfigurationError> {
        let key = non_empty(self.key.as_deref())
            .ok_or(ConfigurationError::MissingSetting(setting::KEY))?;
        let key_id = non_empty(self.key_id.as_deref())
            .ok_or(ConfigurationError::MissingSetting(setting::KEY_ID))?;
        let team_id = non_empty(self.team_id.as_deref())
            .ok_or(ConfigurationError::MissingSetting(setting::TEAM_ID))?;

        let actual = team_id.chars().count();
        if actual != TEAM_ID_LENGTH {
            return Err(ConfigurationError::InvalidLength {
                setting: setting::TEAM_ID,
                expected: TEAM_ID_LENGTH,
                actual,
            });
        }

        Ok(DeploymentCredentials {
            key: key.to_string(),
            key_id: key_id.to_string(),
            team_id: team_id.to_string(),
            environment: PushEnvironment::from_setting(self.environment.as_deref()),
        })
    }
}
