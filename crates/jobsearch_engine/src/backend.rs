use std::time::Duration;

use futures_util::StreamExt;
use jobsearch_logging::{jobsearch_debug, jobsearch_warn};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use url::Url;

use crate::types::ErrorBody;
use crate::{BackendError, FailureKind, JobRecord, SearchRequest, SearchResponse};

#[derive(Debug, Clone)]
pub struct BackendSettings {
    pub base_url: String,
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            endpoint: "/api/jobs".to_string(),
            connect_timeout: Duration::from_secs(10),
            // Scraping backends routinely take a minute or more.
            request_timeout: Duration::from_secs(120),
            max_bytes: 2 * 1024 * 1024,
        }
    }
}

impl BackendSettings {
    pub fn endpoint_url(&self) -> Result<Url, BackendError> {
        Url::parse(&self.base_url)
            .and_then(|base| base.join(&self.endpoint))
            .map_err(|err| BackendError::new(FailureKind::InvalidUrl(err.to_string())))
    }
}

/// The search service, seen from the client: one request in, jobs or an error out.
#[async_trait::async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<JobRecord>, BackendError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    settings: BackendSettings,
    endpoint: Url,
    client: reqwest::Client,
}

impl ReqwestBackend {
    pub fn new(settings: BackendSettings) -> Result<Self, BackendError> {
        let endpoint = settings.endpoint_url()?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| BackendError::new(FailureKind::Network(err.to_string())))?;
        Ok(Self {
            settings,
            endpoint,
            client,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, BackendError> {
        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(BackendError::new(FailureKind::TooLarge {
                    max_bytes,
                    actual: Some(content_len),
                }));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(BackendError::new(FailureKind::TooLarge {
                    max_bytes,
                    actual: Some(next_len),
                }));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl SearchBackend for ReqwestBackend {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<JobRecord>, BackendError> {
        let body = serde_json::to_vec(request)
            .map_err(|err| BackendError::new(FailureKind::MalformedBody(err.to_string())))?;

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            // An unreadable or non-JSON error body just means no server message.
            let server_message = self
                .read_body(response)
                .await
                .ok()
                .and_then(|bytes| serde_json::from_slice::<ErrorBody>(&bytes).ok())
                .and_then(|body| body.error);
            jobsearch_warn!(
                "search endpoint answered {} (message: {:?})",
                status,
                server_message
            );
            return Err(BackendError::with_server_message(
                FailureKind::HttpStatus(status.as_u16()),
                server_message,
            ));
        }

        let bytes = self.read_body(response).await?;
        let parsed: SearchResponse = serde_json::from_slice(&bytes)
            .map_err(|err| BackendError::new(FailureKind::MalformedBody(err.to_string())))?;
        jobsearch_debug!(
            "search endpoint returned {} jobs in {} bytes",
            parsed.jobs.len(),
            bytes.len()
        );
        Ok(parsed.jobs)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> BackendError {
    if err.is_timeout() {
        return BackendError::new(FailureKind::Timeout);
    }
    BackendError::new(FailureKind::Network(err.to_string()))
}
