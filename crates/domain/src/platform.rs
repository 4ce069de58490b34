//! Platforms — dependent display/control modules fed by the hub client.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::api_version::ApiVersion;

/// A dependent module that reads state from the shared hub client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Climate,
    WaterHeater,
    Sensor,
    BinarySensor,
}

impl Platform {
    /// Identifier used when requesting the platform to load.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Climate => "climate",
            Self::WaterHeater => "water_heater",
            Self::Sensor => "sensor",
            Self::BinarySensor => "binary_sensor",
        }
    }

    /// Platforms to load for a client speaking `version`, in load order.
    ///
    /// `climate` and `water_heater` are always loaded. Device-level
    /// platforms need the v3 API.
    #[must_use]
    pub fn for_api_version(version: ApiVersion) -> Vec<Self> {
        let mut platforms = vec![Self::Climate, Self::WaterHeater];
        if version == ApiVersion::V3 {
            platforms.extend([Self::Sensor, Self::BinarySensor]);
        }
        platforms
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
