//! Broker — owns the shared client handle and runs the periodic refresh.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use geniushub_domain::DOMAIN;
use geniushub_domain::error::GeniusHubError;
use geniushub_domain::event::Event;

use crate::ports::{EventPublisher, HubClient};

/// Fixed interval between two refreshes. Also the only retry policy.
pub const SCAN_INTERVAL: Duration = Duration::from_secs(60);

/// What a refresh tick ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Data was fetched and one signal was published.
    Refreshed,
    /// The hub answered with an error status; nothing was published.
    Skipped,
}

/// Holds the shared hub client and notifies subscribers after each fetch.
pub struct GeniusBroker<C, EP> {
    client: Arc<C>,
    publisher: EP,
}

impl<C, EP> GeniusBroker<C, EP> {
    /// Create a broker around an already constructed client.
    pub fn new(client: Arc<C>, publisher: EP) -> Self {
        Self { client, publisher }
    }

    /// The shared client handle.
    #[must_use]
    pub fn client(&self) -> &Arc<C> {
        &self.client
    }
}

impl<C: HubClient, EP: EventPublisher> GeniusBroker<C, EP> {
    /// Refresh callback, run once per tick.
    ///
    /// A response error from the hub is logged and the tick is skipped.
    ///
    /// # Errors
    ///
    /// Any other client error, and publishing failures, are returned to the
    /// caller untouched.
    #[tracing::instrument(skip_all)]
    pub async fn refresh(&self) -> Result<RefreshOutcome, GeniusHubError> {
        match self.client.update().await {
            Ok(()) => {}
            Err(GeniusHubError::Response(err)) => {
                tracing::warn!(%err, "update failed");
                return Ok(RefreshOutcome::Skipped);
            }
            Err(err) => return Err(err),
        }

        self.log_snapshot();
        self.publisher.publish(Event::signal(DOMAIN)).await?;
        Ok(RefreshOutcome::Refreshed)
    }

    /// Emit the raw data currently held by the client at debug level.
    pub fn log_snapshot(&self) {
        let snapshot = self.client.snapshot();
        tracing::debug!(
            raw_zones = %snapshot.zones,
            raw_devices = %snapshot.devices,
            "raw hub data"
        );
    }
}

/// Spawn the refresh loop: one [`GeniusBroker::refresh`] per `period`.
///
/// The first tick happens one `period` after the call. Each refresh is
/// awaited before the next tick is taken, so fetches never overlap.
/// Unexpected errors are logged and the loop carries on.
pub fn spawn_refresh_loop<C, EP>(broker: Arc<GeniusBroker<C, EP>>, period: Duration) -> JoinHandle<()>
where
    C: HubClient + 'static,
    EP: EventPublisher + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            if let Err(err) = broker.refresh().await {
                tracing::error!(%err, "unexpected error while refreshing hub data");
            }
        }
    })
}
