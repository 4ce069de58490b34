//! Raw hub data as last fetched by a client.

use serde::{Deserialize, Serialize};

/// The two raw JSON blobs a client holds after a successful fetch.
///
/// The integration never interprets these; platforms read them from the
/// shared client after each notification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSnapshot {
    /// Raw zone list.
    pub zones: serde_json::Value,
    /// Raw device list.
    pub devices: serde_json::Value,
}

impl RawSnapshot {
    /// Number of zones, when the zone blob is a list.
    #[must_use]
    pub fn zone_count(&self) -> Option<usize> {
        self.zones.as_array().map(Vec::len)
    }

    /// Number of devices, when the device blob is a list.
    #[must_use]
    pub fn device_count(&self) -> Option<usize> {
        self.devices.as_array().map(Vec::len)
    }
}
