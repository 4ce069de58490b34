//! # geniushub-domain
//!
//! Pure domain model for the Genius Hub integration.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the **connection configuration** and its two mutually exclusive
//!   shapes (token-only or host + credentials)
//! - Define the **API version** reported by a hub client
//! - Define the **platforms** (dependent display modules) the integration loads
//! - Define the **raw snapshot** a client holds after a fetch
//! - Define the **signal event** published after a successful refresh
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod api_version;
pub mod connection;
pub mod event;
pub mod platform;
pub mod snapshot;

/// Name of the integration, also used as the notification channel.
pub const DOMAIN: &str = "geniushub";
