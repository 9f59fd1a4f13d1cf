//! Matchdash engine: matcher-API client, effect execution, and export output.
mod client;
mod engine;
mod export;
mod persist;
mod types;

pub use client::{ApiClient, ApiError, ApiSettings, MatcherApi, DEFAULT_BASE_URL};
pub use engine::{EngineCommand, EngineEvent, EngineHandle};
pub use export::{build_jobs_csv, write_jobs_export, ExportError, EXPORT_FILENAME};
pub use persist::{ensure_state_dir, AtomicFileWriter, PersistError};
pub use types::{ParseResumeResponse, SearchJobsResponse};
