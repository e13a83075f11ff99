//! Job search engine: backend collaborator, request execution, and time source.
mod backend;
mod clock;
mod engine;
mod types;

pub use backend::{BackendSettings, ReqwestBackend, SearchBackend};
pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::EngineHandle;
pub use types::{
    BackendError, EngineEvent, FailureKind, JobRecord, RequestToken, SearchRequest,
    SearchResponse,
};
