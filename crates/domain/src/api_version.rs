//! Hub API version.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Protocol version spoken by a hub client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApiVersion {
    /// Cloud API, token authenticated.
    V1,
    /// Local API, credential authenticated. Exposes per-device data.
    V3,
}

impl ApiVersion {
    /// Numeric version as reported by the hub.
    #[must_use]
    pub fn as_u8(self) -> u8 {
        match self {
            Self::V1 => 1,
            Self::V3 => 3,
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.as_u8())
    }
}
