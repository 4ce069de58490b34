//! Genius Hub integration — setup routine, refresh scheduling and platform fan-out.

use std::sync::Arc;

use tokio::task::JoinHandle;

use geniushub_domain::DOMAIN;
use geniushub_domain::connection::ConnectionConfig;
use geniushub_domain::error::GeniusHubError;
use geniushub_domain::platform::Platform;

use crate::ports::{
    EventPublisher, HubClient, HubClientFactory, Integration, PlatformLoader, SetupOutcome,
};
use crate::services::broker::{GeniusBroker, SCAN_INTERVAL, spawn_refresh_loop};

/// Integration polling one Genius Hub.
///
/// Lifecycle: not started → running (refreshing every [`SCAN_INTERVAL`]) →
/// torn down. A setup whose initial fetch is rejected by the hub leaves the
/// integration inert: nothing is scheduled and no platform is loaded.
pub struct GeniusHubIntegration<F: HubClientFactory, EP, L> {
    config: ConnectionConfig,
    factory: F,
    publisher: EP,
    loader: L,
    broker: Option<Arc<GeniusBroker<F::Client, EP>>>,
    refresh_handle: Option<JoinHandle<()>>,
    platform_handles: Vec<JoinHandle<()>>,
}

impl<F: HubClientFactory, EP, L> GeniusHubIntegration<F, EP, L> {
    /// Create an integration that has not been set up yet.
    pub fn new(config: ConnectionConfig, factory: F, publisher: EP, loader: L) -> Self {
        Self {
            config,
            factory,
            publisher,
            loader,
            broker: None,
            refresh_handle: None,
            platform_handles: Vec::new(),
        }
    }

    /// The shared client handle, once setup has succeeded.
    #[must_use]
    pub fn client(&self) -> Option<&Arc<F::Client>> {
        self.broker.as_ref().map(|broker| broker.client())
    }

    /// Whether the periodic refresh is scheduled.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.refresh_handle.is_some()
    }

    fn stop_background(&mut self) {
        if let Some(handle) = self.refresh_handle.take() {
            handle.abort();
            tracing::debug!("refresh task aborted");
        }
        for handle in self.platform_handles.drain(..) {
            handle.abort();
        }
        self.broker = None;
    }
}

impl<F, EP, L> Integration for GeniusHubIntegration<F, EP, L>
where
    F: HubClientFactory,
    EP: EventPublisher + Clone + Send + Sync + 'static,
    L: PlatformLoader<F::Client> + Clone + 'static,
{
    fn name(&self) -> &'static str {
        DOMAIN
    }

    async fn setup(&mut self) -> Result<SetupOutcome, GeniusHubError> {
        self.stop_background();

        let connection = self.config.validate()?;
        let client = Arc::new(self.factory.connect(&connection)?);
        let broker = Arc::new(GeniusBroker::new(
            Arc::clone(&client),
            self.publisher.clone(),
        ));

        match client.update().await {
            Ok(()) => {}
            Err(GeniusHubError::Response(err)) => {
                tracing::error!(%err, "setup failed, check your configuration");
                return Ok(SetupOutcome::Failed);
            }
            Err(err) => return Err(err),
        }
        broker.log_snapshot();

        self.refresh_handle = Some(spawn_refresh_loop(Arc::clone(&broker), SCAN_INTERVAL));

        let api_version = client.api_version();
        for platform in Platform::for_api_version(api_version) {
            let loader = self.loader.clone();
            let client = Arc::clone(&client);
            self.platform_handles.push(tokio::spawn(async move {
                if let Err(err) = loader.load(platform, client).await {
                    tracing::error!(%platform, %err, "failed to load platform");
                }
            }));
        }

        tracing::info!(
            %api_version,
            interval_secs = SCAN_INTERVAL.as_secs(),
            "Genius Hub integration started"
        );
        self.broker = Some(broker);
        Ok(SetupOutcome::Ready)
    }

    async fn teardown(&mut self) -> Result<(), GeniusHubError> {
        self.stop_background();
        tracing::info!("Genius Hub integration stopped");
        Ok(())
    }
}
