//! Per-device delivery outcome.

/// A device the transport refused to deliver to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// Device token.
    pub device: String,
    /// HTTP status from APNs, if a response was received.
    pub status: Option<u16>,
    /// APNs reason (e.g. `BadDeviceToken`) or transport error text.
    pub reason: Option<String>,
}

/// Result of a delivery attempt, split into accepted and rejected devices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryReport {
    pub sent: Vec<String>,
    pub failed: Vec<Rejection>,
}

impl DeliveryReport {
    /// Report a device as accepted.
    pub fn accepted(device: impl Into<String>) -> Self {
        Self {
            sent: vec![device.into()],
            failed: Vec::new(),
        }
    }

    /// Report a device as rejected.
    pub fn rejected(
        device: impl Into<String>,
        status: Option<u16>,
        reason: Option<String>,
    ) -> Self {
        Self {
            sent: Vec::new(),
            failed: vec![Rejection {
                device: device.into(),
                status,
                reason,
            }],
        }
    }

    /// Check if the device was accepted.
    pub fn is_sent(&self, device: &str) -> bool {
        self.sent.iter().any(|d| d == device)
    }
}
