//! HTTP adapter error types.

use geniushub_domain::error::{GeniusHubError, ResponseError};

/// Errors specific to the HTTP adapter.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The configured host cannot be turned into a URL.
    #[error("invalid hub host {host:?}")]
    InvalidHost {
        host: String,
        #[source]
        source: url::ParseError,
    },

    /// The reqwest client could not be built.
    #[error("failed to build HTTP client")]
    Build(#[source] reqwest::Error),

    /// The hub answered with an unsuccessful status.
    #[error("{status} returned by {url}")]
    Status { status: u16, url: String },

    /// The request could not be sent or the response not received.
    #[error("request to hub failed")]
    Transport(#[source] reqwest::Error),

    /// The response body is not valid JSON.
    #[error("failed to decode hub response")]
    Decode(#[source] reqwest::Error),
}

impl HttpError {
    /// Convert into a [`GeniusHubError`] for propagation across port
    /// boundaries. Only status failures become [`GeniusHubError::Response`].
    #[must_use]
    pub fn into_domain(self) -> GeniusHubError {
        match self {
            Self::Status { status, url } => ResponseError { status, url }.into(),
            other => GeniusHubError::Client(Box::new(other)),
        }
    }
}

impl From<HttpError> for GeniusHubError {
    fn from(err: HttpError) -> Self {
        err.into_domain()
    }
}
