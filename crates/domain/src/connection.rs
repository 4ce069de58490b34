//! Connection configuration — the two mutually exclusive ways to reach a hub.
//!
//! A hub is reached either through the cloud API with a single access token,
//! or directly on the local network with a host and user credentials.
//! [`ConnectionConfig`] is the raw configuration block as read from a file;
//! [`ConnectionConfig::validate`] turns it into a [`Connection`].

use std::fmt;

use serde::{Deserialize, Deserializer};

use crate::api_version::ApiVersion;
use crate::error::ConfigError;

/// Raw connection configuration block.
///
/// Every key is optional at this stage. Unknown keys are ignored, and
/// numbers or booleans are accepted as their text form (`password = 1234`).
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    /// Hub hostname or IP address (local API).
    #[serde(deserialize_with = "scalar_as_string")]
    pub host: Option<String>,
    /// Hub username (local API).
    #[serde(deserialize_with = "scalar_as_string")]
    pub username: Option<String>,
    /// Hub password (local API).
    #[serde(deserialize_with = "scalar_as_string")]
    pub password: Option<String>,
    /// Cloud access token.
    #[serde(deserialize_with = "scalar_as_string")]
    pub token: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

fn scalar_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.map(|scalar| match scalar {
        Scalar::Bool(val) => val.to_string(),
        Scalar::Int(val) => val.to_string(),
        Scalar::Float(val) => val.to_string(),
        Scalar::String(val) => val,
    }))
}

impl ConnectionConfig {
    /// Validate the block against the two accepted shapes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Conflicting`] when a token is combined with any
    /// host-mode key, [`ConfigError::Incomplete`] when host mode lacks a key,
    /// and [`ConfigError::Missing`] when neither shape is present.
    pub fn validate(&self) -> Result<Connection, ConfigError> {
        let host_mode = self.host.is_some() || self.username.is_some() || self.password.is_some();

        match (&self.token, host_mode) {
            (Some(_), true) => Err(ConfigError::Conflicting),
            (Some(token), false) => Ok(Connection::Token {
                token: token.clone(),
            }),
            (None, false) => Err(ConfigError::Missing),
            (None, true) => {
                let host = self
                    .host
                    .clone()
                    .ok_or(ConfigError::Incomplete { field: "host" })?;
                let username = self
                    .username
                    .clone()
                    .ok_or(ConfigError::Incomplete { field: "username" })?;
                let password = self
                    .password
                    .clone()
                    .ok_or(ConfigError::Incomplete { field: "password" })?;
                Ok(Connection::Host {
                    host,
                    username,
                    password,
                })
            }
        }
    }
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| REDACTED))
            .field("token", &self.token.as_ref().map(|_| REDACTED))
            .finish()
    }
}

const REDACTED: &str = "***";

/// Validated connection arguments.
#[derive(Clone, PartialEq, Eq)]
pub enum Connection {
    /// Local API, reached directly on the network.
    Host {
        host: String,
        username: String,
        password: String,
    },
    /// Cloud API, authenticated with an access token.
    Token { token: String },
}

impl Connection {
    /// API version a client built from these arguments speaks.
    #[must_use]
    pub fn api_version(&self) -> ApiVersion {
        match self {
            Self::Host { .. } => ApiVersion::V3,
            Self::Token { .. } => ApiVersion::V1,
        }
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Host { host, username, .. } => f
                .debug_struct("Host")
                .field("host", host)
                .field("username", username)
                .field("password", &REDACTED)
                .finish(),
            Self::Token { .. } => f.debug_struct("Token").field("token", &REDACTED).finish(),
        }
    }
}
