use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use scholar_core::{RequestId, ResourceName, ResourcePayload};
use scholar_logging::{scholar_debug, scholar_error};
use tokio_util::sync::CancellationToken;

use crate::decode::decode_payload;
use crate::fetch::{DirectoryFetcher, FetchSettings, Fetcher, ReqwestFetcher};
use crate::{EngineEvent, FailureKind, FetchError};

/// The engine thread has exited and no further events will arrive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("engine thread has stopped")]
pub struct EngineStopped;

enum EngineCommand {
    Load {
        request_id: RequestId,
        resource: ResourceName,
    },
}

/// Background loader: a thread owning a Tokio runtime that fetches and
/// decodes resources and reports back over a channel.
///
/// A new load for a resource cancels the one still in flight for it; the
/// cancelled request is reported with [`FailureKind::Cancelled`].
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    scholar_error!("failed to start engine runtime: {}", err);
                    return;
                }
            };
            let mut in_flight: HashMap<ResourceName, CancellationToken> = HashMap::new();
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::Load {
                        request_id,
                        resource,
                    } => {
                        let token = CancellationToken::new();
                        if let Some(previous) = in_flight.insert(resource, token.clone()) {
                            previous.cancel();
                        }
                        let fetcher = fetcher.clone();
                        let event_tx = event_tx.clone();
                        runtime.spawn(async move {
                            let result = load(fetcher.as_ref(), resource, &token).await;
                            let _ = event_tx.send(EngineEvent::LoadCompleted {
                                request_id,
                                resource,
                                result,
                            });
                        });
                    }
                }
            }
        });

        Self { cmd_tx, event_rx }
    }

    /// Engine reading `<base_url>/data/<file>` over HTTP.
    pub fn http(base_url: impl Into<String>, settings: FetchSettings) -> Self {
        Self::new(Arc::new(ReqwestFetcher::new(base_url, settings)))
    }

    /// Engine reading `<dir>/<file>` from disk.
    pub fn directory(dir: impl Into<PathBuf>, settings: &FetchSettings) -> Self {
        Self::new(Arc::new(DirectoryFetcher::new(dir, settings)))
    }

    pub fn load(&self, request_id: RequestId, resource: ResourceName) {
        let _ = self.cmd_tx.send(EngineCommand::Load {
            request_id,
            resource,
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Waits up to `timeout` for the next event. `Ok(None)` means the wait
    /// timed out.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Option<EngineEvent>, EngineStopped> {
        match self.event_rx.recv_timeout(timeout) {
            Ok(event) => Ok(Some(event)),
            Err(mpsc::RecvTimeoutError::Timeout) => Ok(None),
            Err(mpsc::RecvTimeoutError::Disconnected) => Err(EngineStopped),
        }
    }
}

async fn load(
    fetcher: &dyn Fetcher,
    resource: ResourceName,
    token: &CancellationToken,
) -> Result<ResourcePayload, FetchError> {
    tokio::select! {
        _ = token.cancelled() => {
            scholar_debug!("load of {} superseded", resource);
            Err(FetchError::new(FailureKind::Cancelled, "superseded by a newer request"))
        }
        result = fetch_and_decode(fetcher, resource) => result,
    }
}

async fn fetch_and_decode(
    fetcher: &dyn Fetcher,
    resource: ResourceName,
) -> Result<ResourcePayload, FetchError> {
    let output = fetcher.fetch(resource).await?;
    scholar_debug!(
        "fetched {} ({} bytes) from {}",
        resource,
        output.metadata.byte_len,
        output.metadata.location
    );
    decode_payload(resource, &output.bytes)
        .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))
}
