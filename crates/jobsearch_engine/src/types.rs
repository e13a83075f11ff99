use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type RequestToken = u64;

/// Request body posted to the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub title: String,
    /// Experience code, `"1"` through `"6"`.
    pub experience: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    #[serde(default)]
    pub company: Option<String>,
    pub link: String,
}

/// Success body. A missing `jobs` field means no results.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub jobs: Vec<JobRecord>,
}

/// Optional body of a non-success response.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    SearchCompleted {
        token: RequestToken,
        result: Result<Vec<JobRecord>, BackendError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct BackendError {
    pub kind: FailureKind,
    /// Error text supplied by the server, if the response carried one.
    pub server_message: Option<String>,
}

impl BackendError {
    pub(crate) fn new(kind: FailureKind) -> Self {
        Self {
            kind,
            server_message: None,
        }
    }

    pub(crate) fn with_server_message(kind: FailureKind, message: Option<String>) -> Self {
        Self {
            kind,
            server_message: message,
        }
    }

    /// True when the backend itself answered, as opposed to a transport-level failure.
    pub fn is_application_error(&self) -> bool {
        matches!(self.kind, FailureKind::HttpStatus(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureKind {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("timeout")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response body: {0}")]
    MalformedBody(String),
    #[error("response too large (max {max_bytes}, actual {actual:?})")]
    TooLarge { max_bytes: u64, actual: Option<u64> },
    #[error("search task ended without a result")]
    Aborted,
}
