//! # geniushubd — Genius Hub daemon
//!
//! Composition root that wires the integration to its adapters and runs it.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Install the tracing subscriber
//! - Construct the event bus, the HTTP client factory and the platforms
//! - Set the integration up; exit with an error when the hub rejects it
//! - Run until Ctrl-C, then tear everything down
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use geniushub_adapter_http_reqwest::HttpClientFactory;
use geniushub_app::event_bus::InProcessEventBus;
use geniushub_app::ports::{Integration, SetupOutcome};
use geniushub_app::services::hub_integration::GeniusHubIntegration;
use geniushub_app::services::platform_monitor::PlatformMonitor;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Event bus
    let event_bus = Arc::new(InProcessEventBus::new(16));

    // Platforms
    let platforms = Arc::new(PlatformMonitor::new(Arc::clone(&event_bus)));

    // Integration
    let mut integration = GeniusHubIntegration::new(
        config.geniushub,
        HttpClientFactory::default(),
        Arc::clone(&event_bus),
        Arc::clone(&platforms),
    );

    if integration.setup().await? == SetupOutcome::Failed {
        return Err("Genius Hub setup failed, check your configuration".into());
    }

    tokio::signal::ctrl_c().await?;
    tracing::info!("shutdown requested");

    integration.teardown().await?;
    platforms.shutdown();

    Ok(())
}
