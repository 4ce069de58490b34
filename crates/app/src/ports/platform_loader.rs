//! Platform loader port — deferred loading of dependent display modules.

use std::future::Future;
use std::sync::Arc;

use geniushub_domain::error::GeniusHubError;
use geniushub_domain::platform::Platform;

/// Loads a [`Platform`] that will read state from the shared client.
///
/// The client handle is passed explicitly; there is no ambient lookup.
pub trait PlatformLoader<C>: Send + Sync {
    /// Load `platform`, giving it access to `client`.
    fn load(
        &self,
        platform: Platform,
        client: Arc<C>,
    ) -> impl Future<Output = Result<(), GeniusHubError>> + Send;
}

impl<C, T: PlatformLoader<C>> PlatformLoader<C> for Arc<T> {
    fn load(
        &self,
        platform: Platform,
        client: Arc<C>,
    ) -> impl Future<Output = Result<(), GeniusHubError>> + Send {
        (**self).load(platform, client)
    }
}
