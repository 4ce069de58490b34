//! Hub client port — the handle every part of the integration shares.
//!
//! A client owns all hub state. The integration only asks it to refresh;
//! platforms read the refreshed state back through [`HubClient::snapshot`].

use std::future::Future;

use geniushub_domain::api_version::ApiVersion;
use geniushub_domain::connection::Connection;
use geniushub_domain::error::GeniusHubError;
use geniushub_domain::snapshot::RawSnapshot;

/// A client able to fetch the full state of one hub.
pub trait HubClient: Send + Sync {
    /// Fetch zones and devices from the hub, replacing the held snapshot.
    ///
    /// An unsuccessful HTTP status must be reported as
    /// [`GeniusHubError::Response`]; callers treat every other error as
    /// unexpected.
    fn update(&self) -> impl Future<Output = Result<(), GeniusHubError>> + Send;

    /// API version this client speaks.
    fn api_version(&self) -> ApiVersion;

    /// Copy of the raw data from the last successful [`update`](Self::update).
    fn snapshot(&self) -> RawSnapshot;
}

/// Builds a [`HubClient`] from validated connection arguments.
///
/// Host mode and token mode go through the same constructor; the
/// [`Connection`] variant carries the difference.
pub trait HubClientFactory: Send + Sync {
    /// Concrete client type produced.
    type Client: HubClient + 'static;

    /// Construct a client. Performs no IO.
    ///
    /// # Errors
    ///
    /// Returns [`GeniusHubError::Client`] when the underlying client cannot
    /// be built.
    fn connect(&self, connection: &Connection) -> Result<Self::Client, GeniusHubError>;
}
