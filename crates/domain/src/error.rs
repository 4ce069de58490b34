//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`GeniusHubError`] at port boundaries.

/// Top-level error crossing port boundaries.
#[derive(Debug, thiserror::Error)]
pub enum GeniusHubError {
    /// The configuration block matched neither connection shape.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The hub answered with an unsuccessful HTTP status.
    ///
    /// This is the only failure the setup routine and the refresh callback
    /// handle themselves. Every other variant propagates to the caller.
    #[error("hub response error: {0}")]
    Response(#[from] ResponseError),

    /// Any other client failure (transport, decoding, construction, …).
    #[error("hub client error: {0}")]
    Client(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Connection configuration validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Neither a token nor a host was provided.
    #[error("either `token` or `host`, `username` and `password` must be provided")]
    Missing,

    /// A token was provided together with host-mode keys.
    #[error("`token` cannot be combined with `host`, `username` or `password`")]
    Conflicting,

    /// Host mode was selected but one of its keys is absent.
    #[error("`{field}` is required when `host` is provided")]
    Incomplete {
        /// Name of the missing key.
        field: &'static str,
    },
}

/// Unsuccessful HTTP status returned by the hub.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{status} returned by {url}")]
pub struct ResponseError {
    /// HTTP status code.
    pub status: u16,
    /// Requested URL.
    pub url: String,
}
