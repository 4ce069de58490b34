//! Hub client over HTTP.

use std::sync::{PoisonError, RwLock};

use serde_json::Value;
use sha2::{Digest, Sha256};

use geniushub_app::ports::HubClient;
use geniushub_domain::api_version::ApiVersion;
use geniushub_domain::connection::Connection;
use geniushub_domain::error::GeniusHubError;
use geniushub_domain::snapshot::RawSnapshot;

use crate::error::HttpError;

/// Port the local API listens on when the host does not name one.
pub const LOCAL_API_PORT: u16 = 1223;

/// Base URL of the cloud API.
pub const DEFAULT_CLOUD_URL: &str = "https://my.geniushub.co.uk/v1";

enum Auth {
    Bearer(String),
    Basic { username: String, digest: String },
}

/// [`HubClient`] speaking the hub's JSON API with reqwest.
///
/// Holds the last fetched [`RawSnapshot`]; it is only replaced once both
/// the zone and the device fetch have succeeded.
pub struct HttpHubClient {
    http: reqwest::Client,
    base_url: String,
    auth: Auth,
    api_version: ApiVersion,
    snapshot: RwLock<RawSnapshot>,
}

impl HttpHubClient {
    /// Build a client for `connection`. Token connections use `cloud_url`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidHost`] when the host cannot form a URL and
    /// [`HttpError::Build`] when reqwest cannot build its client.
    pub fn new(connection: &Connection, cloud_url: &str) -> Result<Self, HttpError> {
        let (base_url, auth) = match connection {
            Connection::Host {
                host,
                username,
                password,
            } => (
                local_base_url(host)?,
                Auth::Basic {
                    username: username.clone(),
                    digest: password_digest(username, password),
                },
            ),
            Connection::Token { token } => (
                cloud_url.trim_end_matches('/').to_string(),
                Auth::Bearer(token.clone()),
            ),
        };

        let http = reqwest::Client::builder()
            .user_agent(concat!("geniushub/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(HttpError::Build)?;

        tracing::debug!(%base_url, api_version = %connection.api_version(), "hub client created");

        Ok(Self {
            http,
            base_url,
            auth,
            api_version: connection.api_version(),
            snapshot: RwLock::new(RawSnapshot::default()),
        })
    }

    /// Base URL every endpoint is resolved against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn device_endpoint(&self) -> &'static str {
        match self.api_version {
            ApiVersion::V1 => "devices",
            ApiVersion::V3 => "data_manager",
        }
    }

    async fn fetch(&self) -> Result<(), HttpError> {
        let zones = self.get("zones").await?;
        let devices = self.get(self.device_endpoint()).await?;

        *self
            .snapshot
            .write()
            .unwrap_or_else(PoisonError::into_inner) = RawSnapshot { zones, devices };
        Ok(())
    }

    async fn get(&self, endpoint: &str) -> Result<Value, HttpError> {
        let url = format!("{}/{endpoint}", self.base_url);
        let request = self.http.get(&url);
        let request = match &self.auth {
            Auth::Bearer(token) => request.bearer_auth(token),
            Auth::Basic { username, digest } => request.basic_auth(username, Some(digest)),
        };

        let response = request.send().await.map_err(HttpError::Transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body: Value = response.json().await.map_err(HttpError::Decode)?;
        tracing::trace!(%url, "hub response received");

        Ok(match self.api_version {
            ApiVersion::V1 => body,
            ApiVersion::V3 => unwrap_envelope(body),
        })
    }
}

impl HubClient for HttpHubClient {
    async fn update(&self) -> Result<(), GeniusHubError> {
        self.fetch().await.map_err(HttpError::into_domain)
    }

    fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    fn snapshot(&self) -> RawSnapshot {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Local API base URL for `host`, defaulting the scheme and the port.
fn local_base_url(host: &str) -> Result<String, HttpError> {
    let raw = if host.contains("://") {
        host.to_string()
    } else {
        format!("http://{host}")
    };

    let mut url = url::Url::parse(&raw).map_err(|source| HttpError::InvalidHost {
        host: host.to_string(),
        source,
    })?;
    if url.port().is_none() && url.set_port(Some(LOCAL_API_PORT)).is_err() {
        return Err(HttpError::InvalidHost {
            host: host.to_string(),
            source: url::ParseError::InvalidPort,
        });
    }

    Ok(format!("{}/v3", url.as_str().trim_end_matches('/')))
}

/// Password sent to the local API: hex SHA-256 of `username + password`.
fn password_digest(username: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(username.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// The local API wraps results as `{"data": …}`.
fn unwrap_envelope(body: Value) -> Value {
    match body {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}
