//! Remote command events.

use serde::{Deserialize, Deserializer};

use crate::{EventError, non_empty, positive_integer, positive_number};

/// Absorption time used when a carbs entry carries none (hours).
pub const DEFAULT_ABSORPTION_HOURS: f64 = 3.0;

/// Event type names understood by Loop.
pub mod event_type {
    pub const TEMPORARY_OVERRIDE_CANCEL: &str = "Temporary Override Cancel";
    pub const TEMPORARY_OVERRIDE: &str = "Temporary Override";
    pub const REMOTE_CARBS_ENTRY: &str = "Remote Carbs Entry";
    pub const REMOTE_BOLUS_ENTRY: &str = "Remote Bolus Entry";
}

/// Event as submitted by the caller, before any validation.
///
/// Every field is kept as text. JSON numbers and booleans are accepted and
/// converted to their decimal or literal form.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    #[serde(default, deserialize_with = "lenient_text")]
    pub event_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub reason: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub reason_display: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub remote_carbs: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub remote_absorption: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub remote_bolus: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub otp: Option<String>,
    #[serde(default, rename = "created_at", deserialize_with = "lenient_text")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub entered_by: Option<String>,
}

impl RawEvent {
    /// Create an event of the given type with no other fields set.
    pub fn new(event_type: &str) -> Self {
        Self {
            event_type: Some(event_type.to_string()),
            ..Default::default()
        }
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Field {
        Text(String),
        Integer(i64),
        Number(f64),
        Flag(bool),
    }

    Ok(Option::<Field>::deserialize(deserializer)?.map(|field| match field {
        Field::Text(text) => text,
        Field::Integer(n) => n.to_string(),
        Field::Number(n) => n.to_string(),
        Field::Flag(b) => b.to_string(),
    }))
}

/// A validated remote command, one variant per supported event type.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteCommand {
    /// End the running temporary override.
    CancelTemporaryOverride,
    /// Start a named temporary override.
    TemporaryOverride {
        name: String,
        display_name: String,
        duration_minutes: Option<u64>,
    },
    /// Record carbohydrates.
    CarbsEntry {
        grams: f64,
        absorption_hours: f64,
        otp: Option<String>,
        start_time: Option<String>,
    },
    /// Deliver a bolus.
    BolusEntry { units: f64, otp: Option<String> },
}

/// A validated event: the command plus the annotations shared by all types.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteEvent {
    pub command: RemoteCommand,
    pub notes: Option<String>,
    pub entered_by: Option<String>,
}

impl TryFrom<&RawEvent> for RemoteEvent {
    type Error = EventError;

    fn try_from(raw: &RawEvent) -> Result<Self, Self::Error> {
        Ok(Self {
            command: RemoteCommand::try_from(raw)?,
            notes: owned(raw.notes.as_deref()),
            entered_by: owned(raw.entered_by.as_deref()),
        })
    }
}

impl TryFrom<&RawEvent> for RemoteCommand {
    type Error = EventError;

    fn try_from(raw: &RawEvent) -> Result<Self, Self::Error> {
        let kind = raw.event_type.as_deref().ok_or(EventError::MissingEventType)?;

        match kind {
            event_type::TEMPORARY_OVERRIDE_CANCEL => Ok(Self::CancelTemporaryOverride),
            event_type::TEMPORARY_OVERRIDE => {
                let name = non_empty(raw.reason.as_deref()).ok_or(EventError::MissingField("reason"))?;
                let display_name = non_empty(raw.reason_display.as_deref())
                    .ok_or(EventError::MissingField("reasonDisplay"))?;

                Ok(Self::TemporaryOverride {
                    name: name.to_string(),
                    display_name: display_name.to_string(),
                    duration_minutes: positive_integer(raw.duration.as_deref()),
                })
            }
            event_type::REMOTE_CARBS_ENTRY => {
                let grams = positive_number(raw.remote_carbs.as_deref()).ok_or_else(|| {
                    EventError::InvalidField {
                        field: "carbs entry",
                        value: raw.remote_carbs.clone().unwrap_or_default(),
                    }
                })?;

                Ok(Self::CarbsEntry {
                    grams,
                    absorption_hours: positive_number(raw.remote_absorption.as_deref())
                        .unwrap_or(DEFAULT_ABSORPTION_HOURS),
                    otp: owned(raw.otp.as_deref()),
                    start_time: owned(raw.created_at.as_deref()),
                })
            }
            event_type::REMOTE_BOLUS_ENTRY => {
                let units = positive_number(raw.remote_bolus.as_deref()).ok_or_else(|| {
                    EventError::InvalidField {
                        field: "bolus entry",
                        value: raw.remote_bolus.clone().unwrap_or_default(),
                    }
                })?;

                Ok(Self::BolusEntry {
                    units,
                    otp: owned(raw.otp.as_deref()),
                })
            }
            other => Err(EventError::UnhandledEventType(other.to_string())),
        }
    }
}

fn owned(value: Option<&str>) -> Option<String> {
    non_empty(value).map(str::to_string)
}
