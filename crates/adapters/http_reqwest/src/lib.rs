//! # geniushub-adapter-http-reqwest
//!
//! HTTP adapter — implements the `HubClient` port against a Genius Hub.
//!
//! ## APIs
//!
//! | Connection | API | Base URL | Authentication | Device endpoint |
//! |------------|-----|----------|----------------|-----------------|
//! | token | v1 (cloud) | `https://my.geniushub.co.uk/v1` | `Bearer <token>` | `devices` |
//! | host | v3 (local) | `http://<host>:1223/v3` | basic, password = hex SHA-256 of `username + password` | `data_manager` |
//!
//! Both APIs expose the zone list under `zones`.
//!
//! ## Error mapping
//!
//! Unsuccessful statuses become `GeniusHubError::Response`, which the
//! integration treats as a rejected fetch. Transport and decoding failures
//! become `GeniusHubError::Client` and propagate.
//!
//! No timeout or retry is configured here; the integration's fixed refresh
//! interval is the retry policy.
//!
//! ## Dependency rule
//!
//! Same as other adapters: depends on `geniushub-app` and `geniushub-domain`.

mod client;
mod error;

pub use client::{DEFAULT_CLOUD_URL, HttpHubClient, LOCAL_API_PORT};
pub use error::HttpError;

use geniushub_app::ports::HubClientFactory;
use geniushub_domain::connection::Connection;
use geniushub_domain::error::GeniusHubError;

/// Builds [`HttpHubClient`]s.
#[derive(Debug, Clone)]
pub struct HttpClientFactory {
    cloud_url: String,
}

impl Default for HttpClientFactory {
    fn default() -> Self {
        Self::with_cloud_url(DEFAULT_CLOUD_URL)
    }
}

impl HttpClientFactory {
    /// Use another base URL for token (cloud) connections.
    #[must_use]
    pub fn with_cloud_url(cloud_url: impl Into<String>) -> Self {
        Self {
            cloud_url: cloud_url.into(),
        }
    }
}

impl HubClientFactory for HttpClientFactory {
    type Client = HttpHubClient;

    fn connect(&self, connection: &Connection) -> Result<HttpHubClient, GeniusHubError> {
        HttpHubClient::new(connection, &self.cloud_url).map_err(HttpError::into_domain)
    }
}
