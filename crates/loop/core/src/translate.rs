//! Event to notification translation.

use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};

use crate::{DeviceTarget, Notification, OutboundPayload, RemoteCommand, RemoteEvent, TIME_SENSITIVE, key};

/// How long a notification stays deliverable after it is sent.
pub const EXPIRATION_SECONDS: i64 = 300;

/// Build the notification for `event` addressed to `target`.
///
/// Pure: the caller supplies the send instant.
pub fn translate(
    event: &RemoteEvent,
    target: &DeviceTarget,
    remote_address: &str,
    now: DateTime<Utc>,
) -> Notification {
    let expiration = now + TimeDelta::seconds(EXPIRATION_SECONDS);

    let mut payload = OutboundPayload::new();
    payload.insert(key::REMOTE_ADDRESS, remote_address);
    payload.insert(key::SENT_AT, iso8601(now));
    payload.insert(key::EXPIRATION, iso8601(expiration));

    let mut alert = command_payload(&event.command, &mut payload);

    if let Some(notes) = &event.notes {
        payload.insert(key::NOTES, notes.as_str());
        alert.push_str(&format!(" - {notes}"));
    }
    if let Some(entered_by) = &event.entered_by {
        payload.insert(key::ENTERED_BY, entered_by.as_str());
        alert.push_str(&format!(" - {entered_by}"));
    }

    Notification {
        alert,
        topic: target.bundle_identifier.clone(),
        content_available: true,
        payload,
        interruption_level: TIME_SENSITIVE,
        expiry: expiration.timestamp(),
    }
}

/// Add the command-specific keys and return the base alert text.
fn command_payload(command: &RemoteCommand, payload: &mut OutboundPayload) -> String {
    match command {
        RemoteCommand::CancelTemporaryOverride => {
            payload.insert(key::CANCEL_TEMPORARY_OVERRIDE, "true");
            "Cancel Temporary Override".to_string()
        }
        RemoteCommand::TemporaryOverride {
            name,
            display_name,
            duration_minutes,
        } => {
            payload.insert(key::OVERRIDE_NAME, name.as_str());
            if let Some(minutes) = duration_minutes {
                payload.insert(key::OVERRIDE_DURATION_MINUTES, *minutes);
            }
            format!("{display_name} Temporary Override")
        }
        RemoteCommand::CarbsEntry {
            grams,
            absorption_hours,
            otp,
            start_time,
        } => {
            payload.insert(key::CARBS_ENTRY, *grams);
            payload.insert(key::ABSORPTION_TIME, *absorption_hours);
            if let Some(otp) = otp {
                payload.insert(key::OTP, otp.as_str());
            }
            if let Some(start_time) = start_time {
                payload.insert(key::START_TIME, start_time.as_str());
            }
            format!("Remote Carbs Entry: {grams} grams\nAbsorption Time: {absorption_hours} hours")
        }
        RemoteCommand::BolusEntry { units, otp } => {
            payload.insert(key::BOLUS_ENTRY, *units);
            if let Some(otp) = otp {
                payload.insert(key::OTP, otp.as_str());
            }
            format!("Remote Bolus Entry: {units} U\n")
        }
    }
}

fn iso8601(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
