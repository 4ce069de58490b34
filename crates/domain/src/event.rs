//! Event — a zero-payload signal published on a named channel.
//!
//! Subscribers only learn *that* something happened on the channel; they
//! re-read whatever state they need from the shared hub client.

use serde::{Deserialize, Serialize};

use crate::id::EventId;
use crate::time::{self, Timestamp};

/// An immutable signal record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    /// Channel the signal was sent on.
    pub channel: String,
    pub timestamp: Timestamp,
}

impl Event {
    /// Create a signal on `channel`, stamped with the current time.
    #[must_use]
    pub fn signal(channel: impl Into<String>) -> Self {
        Self {
            id: EventId::new(),
            channel: channel.into(),
            timestamp: time::now(),
        }
    }

    /// Whether this signal was sent on `channel`.
    #[must_use]
    pub fn is_on(&self, channel: &str) -> bool {
        self.channel == channel
    }
}
