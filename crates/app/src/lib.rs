//! # geniushub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `HubClient` — fetch hub data, report API version, expose raw snapshot
//!   - `HubClientFactory` — build a client from validated connection arguments
//!   - `PlatformLoader` — load a dependent display module
//!   - `EventPublisher` — publish signals
//! - Define the **driving/inbound port** `Integration` (setup, teardown)
//! - Provide the use-cases:
//!   - `GeniusBroker` — the periodic refresh callback
//!   - `GeniusHubIntegration` — the setup routine and refresh loop
//!   - `PlatformMonitor` — platforms that log what they re-read on each signal
//! - Provide **in-process infrastructure** (event bus) that doesn't need IO
//!
//! ## Dependency rule
//! Depends on `geniushub-domain` only (plus `tokio` for channels, tasks and timers).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod event_bus;
pub mod ports;
pub mod services;

#[cfg(test)]
mod testing;
