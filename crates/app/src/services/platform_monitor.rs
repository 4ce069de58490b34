//! Platform monitor — platforms that re-read the shared client on every signal.

use std::sync::{Arc, Mutex, PoisonError};

use tokio::task::JoinHandle;
use tokio_stream::StreamExt as _;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;

use geniushub_domain::DOMAIN;
use geniushub_domain::error::GeniusHubError;
use geniushub_domain::event::Event;
use geniushub_domain::platform::Platform;

use crate::event_bus::InProcessEventBus;
use crate::ports::{HubClient, PlatformLoader};

/// [`PlatformLoader`] whose platforms log a summary of the hub state each
/// time the integration signals a refresh.
pub struct PlatformMonitor {
    bus: Arc<InProcessEventBus>,
    watchers: Mutex<Vec<JoinHandle<()>>>,
}

impl PlatformMonitor {
    /// Create a monitor listening on `bus`.
    #[must_use]
    pub fn new(bus: Arc<InProcessEventBus>) -> Self {
        Self {
            bus,
            watchers: Mutex::new(Vec::new()),
        }
    }

    /// Number of platforms currently watching the bus.
    #[must_use]
    pub fn watcher_count(&self) -> usize {
        self.watchers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Stop every platform watcher.
    pub fn shutdown(&self) {
        let mut watchers = self.watchers.lock().unwrap_or_else(PoisonError::into_inner);
        for handle in watchers.drain(..) {
            handle.abort();
        }
    }
}

impl<C: HubClient + 'static> PlatformLoader<C> for PlatformMonitor {
    async fn load(&self, platform: Platform, client: Arc<C>) -> Result<(), GeniusHubError> {
        let signals = BroadcastStream::new(self.bus.subscribe());
        let handle = tokio::spawn(watch(platform, client, signals));
        self.watchers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(handle);
        tracing::info!(%platform, "platform loaded");
        Ok(())
    }
}

async fn watch<C: HubClient>(platform: Platform, client: Arc<C>, mut signals: BroadcastStream<Event>) {
    while let Some(item) = signals.next().await {
        match item {
            Ok(event) if event.is_on(DOMAIN) => {
                let snapshot = client.snapshot();
                tracing::info!(
                    %platform,
                    zones = snapshot.zone_count().unwrap_or_default(),
                    devices = snapshot.device_count().unwrap_or_default(),
                    "platform state refreshed"
                );
            }
            Ok(_) => {}
            Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                tracing::warn!(%platform, skipped, "platform missed signals");
            }
        }
    }
}
