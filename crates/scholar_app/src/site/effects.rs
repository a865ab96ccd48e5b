use std::path::PathBuf;
use std::time::Duration;

use scholar_core::{Effect, Msg};
use scholar_engine::{AtomicFileWriter, EngineEvent, EngineHandle, EngineStopped, FailureKind};
use scholar_logging::{scholar_debug, scholar_error, scholar_info, scholar_warn};

/// Carries out effects from the core and turns engine events back into
/// messages.
pub struct EffectRunner {
    engine: EngineHandle,
    downloads: AtomicFileWriter,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, download_dir: PathBuf) -> Self {
        Self {
            engine,
            downloads: AtomicFileWriter::new(download_dir),
        }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchResource {
                    request_id,
                    resource,
                } => {
                    scholar_debug!(
                        "FetchResource request_id={} resource={}",
                        request_id,
                        resource
                    );
                    self.engine.load(request_id, resource);
                }
                Effect::SaveBibtex { filename, contents } => {
                    match self.downloads.write(&filename, &contents) {
                        Ok(path) => scholar_info!("saved {}", path.display()),
                        Err(err) => scholar_error!("failed to save {}: {}", filename, err),
                    }
                }
            }
        }
    }

    /// Waits up to `timeout` for the next engine result.
    pub fn next_msg(&self, timeout: Duration) -> Result<Option<Msg>, EngineStopped> {
        Ok(self.engine.recv_timeout(timeout)?.map(event_to_msg))
    }
}

fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::LoadCompleted {
            request_id,
            resource,
            result,
        } => match result {
            Ok(payload) => Msg::ResourceLoaded {
                request_id,
                payload,
            },
            Err(err) => {
                if err.kind == FailureKind::Cancelled {
                    scholar_debug!("request {} for {} was superseded", request_id, resource);
                } else {
                    scholar_warn!("request {} failed: {}", request_id, err);
                }
                Msg::ResourceFailed {
                    request_id,
                    resource,
                    message: err.describe(resource),
                }
            }
        },
    }
}
