//! In-memory fakes for the ports, shared by the unit tests of this crate.

use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

use geniushub_domain::api_version::ApiVersion;
use geniushub_domain::connection::{Connection, ConnectionConfig};
use geniushub_domain::error::{GeniusHubError, ResponseError};
use geniushub_domain::platform::Platform;
use geniushub_domain::snapshot::RawSnapshot;

use crate::ports::{HubClient, HubClientFactory, PlatformLoader};

/// What the next call to `update` should do.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Scripted {
    Ok,
    Status(u16),
    Transport,
}

/// State shared between a [`FakeFactory`] and every client it builds.
#[derive(Default)]
pub(crate) struct FakeHub {
    script: Mutex<VecDeque<Scripted>>,
    snapshot: Mutex<RawSnapshot>,
    updates: AtomicUsize,
    connections: Mutex<Vec<Connection>>,
}

impl FakeHub {
    pub(crate) fn push(&self, step: Scripted) {
        self.script.lock().unwrap().push_back(step);
    }

    pub(crate) fn updates(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    pub(crate) fn connections(&self) -> Vec<Connection> {
        self.connections.lock().unwrap().clone()
    }
}

pub(crate) fn hub_snapshot() -> RawSnapshot {
    RawSnapshot {
        zones: serde_json::json!([{"id": 1, "name": "Lounge"}, {"id": 2, "name": "Kitchen"}]),
        devices: serde_json::json!([{"id": "2-1", "type": "Radiator Valve"}]),
    }
}

pub(crate) struct FakeHubClient {
    hub: Arc<FakeHub>,
    api_version: ApiVersion,
}

impl FakeHubClient {
    pub(crate) fn new(hub: Arc<FakeHub>, api_version: ApiVersion) -> Self {
        Self { hub, api_version }
    }
}

impl HubClient for FakeHubClient {
    async fn update(&self) -> Result<(), GeniusHubError> {
        self.hub.updates.fetch_add(1, Ordering::SeqCst);
        let step = self
            .hub
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Scripted::Ok);
        match step {
            Scripted::Ok => {
                *self.hub.snapshot.lock().unwrap() = hub_snapshot();
                Ok(())
            }
            Scripted::Status(status) => Err(ResponseError {
                status,
                url: "http://hub.test/v3/zones".to_string(),
            }
            .into()),
            Scripted::Transport => Err(GeniusHubError::Client(Box::new(io::Error::new(
                io::ErrorKind::TimedOut,
                "timed out",
            )))),
        }
    }

    fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    fn snapshot(&self) -> RawSnapshot {
        self.hub.snapshot.lock().unwrap().clone()
    }
}

#[derive(Default)]
pub(crate) struct FakeFactory {
    pub(crate) hub: Arc<FakeHub>,
}

impl HubClientFactory for FakeFactory {
    type Client = FakeHubClient;

    fn connect(&self, connection: &Connection) -> Result<FakeHubClient, GeniusHubError> {
        self.hub.connections.lock().unwrap().push(connection.clone());
        Ok(FakeHubClient::new(
            Arc::clone(&self.hub),
            connection.api_version(),
        ))
    }
}

/// Loader that reports every requested platform on a channel.
#[derive(Clone)]
pub(crate) struct RecordingLoader {
    tx: mpsc::UnboundedSender<Platform>,
}

impl RecordingLoader {
    pub(crate) fn new() -> (Self, mpsc::UnboundedReceiver<Platform>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl<C: Send + Sync + 'static> PlatformLoader<C> for RecordingLoader {
    async fn load(&self, platform: Platform, _client: Arc<C>) -> Result<(), GeniusHubError> {
        let _ = self.tx.send(platform);
        Ok(())
    }
}

pub(crate) fn token_config() -> ConnectionConfig {
    ConnectionConfig {
        token: Some("cloud-token".to_string()),
        ..ConnectionConfig::default()
    }
}

pub(crate) fn host_config() -> ConnectionConfig {
    ConnectionConfig {
        host: Some("192.168.1.20".to_string()),
        username: Some("admin".to_string()),
        password: Some("secret".to_string()),
        token: None,
    }
}

/// Captures formatted `tracing` output for the current thread.
#[derive(Clone, Default)]
pub(crate) struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub(crate) fn install(&self) -> tracing::subscriber::DefaultGuard {
        let capture = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .without_time()
            .with_writer(move || capture.clone())
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    pub(crate) fn count(&self, needle: &str) -> usize {
        self.contents().matches(needle).count()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
