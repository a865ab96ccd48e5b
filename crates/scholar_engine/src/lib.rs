//! Scholar engine: resource fetching, decoding and site output.
mod decode;
mod engine;
mod export;
mod fetch;
mod persist;
mod prerender;
mod types;

pub use decode::{decode_payload, DecodeError};
pub use engine::{EngineHandle, EngineStopped};
pub use export::{export_bibtex, ExportError, ExportOptions, ExportSummary};
pub use fetch::{DirectoryFetcher, FetchSettings, Fetcher, ReqwestFetcher};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use prerender::{prerender, RenderedPage, RouteRenderer};
pub use types::{EngineEvent, FailureKind, FetchError, FetchMetadata, FetchOutput};
