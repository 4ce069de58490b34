//! Event bus port — publish/subscribe for signals.

use std::future::Future;

use geniushub_domain::error::GeniusHubError;
use geniushub_domain::event::Event;

/// Publishes signals to interested subscribers.
pub trait EventPublisher {
    /// Publish an event to all current subscribers.
    fn publish(&self, event: Event) -> impl Future<Output = Result<(), GeniusHubError>> + Send;
}

impl<T: EventPublisher + Send + Sync> EventPublisher for std::sync::Arc<T> {
    fn publish(&self, event: Event) -> impl Future<Output = Result<(), GeniusHubError>> + Send {
        (**self).publish(event)
    }
}
