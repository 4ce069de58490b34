//! Integration port — lifecycle of a hub integration.
//!
//! The composition root calls the lifecycle methods in order:
//!
//! 1. [`setup`](Integration::setup) — validate, connect, fetch once, schedule
//! 2. (the integration runs on its own, refreshing on a fixed interval)
//! 3. [`teardown`](Integration::teardown) — stop background work

use std::future::Future;

use geniushub_domain::error::GeniusHubError;

/// Result of a setup attempt that did not raise an unexpected error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupOutcome {
    /// The initial fetch succeeded; refresh is scheduled and platforms requested.
    Ready,
    /// The hub rejected the initial fetch. Nothing was scheduled.
    Failed,
}

impl SetupOutcome {
    /// Whether setup succeeded.
    #[must_use]
    pub fn is_ready(self) -> bool {
        self == Self::Ready
    }
}

/// A pluggable hub integration.
pub trait Integration {
    /// Unique name identifying this integration (e.g. `"geniushub"`).
    fn name(&self) -> &'static str;

    /// Validate configuration, connect and start background work.
    ///
    /// A hub that answers with an error status yields
    /// [`SetupOutcome::Failed`]. Invalid configuration and unexpected client
    /// failures are returned as errors.
    fn setup(&mut self) -> impl Future<Output = Result<SetupOutcome, GeniusHubError>> + Send;

    /// Called on graceful shutdown. Stops any background tasks.
    fn teardown(&mut self) -> impl Future<Output = Result<(), GeniusHubError>> + Send;
}
