use std::path::Path;
use std::time::Duration;

use qa_core::{BackendReply, BackendRequest};
use qa_logging::{qa_debug, qa_warn};
use serde::Serialize;

use crate::upload::file_part;
use crate::{BackendError, FailureKind};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    /// `None` leaves the transport's own behaviour in place.
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

/// The Q/A service's three endpoints.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    async fn scrape(&self, url: &str) -> Result<BackendReply, BackendError>;

    async fn upload(&self, path: &Path) -> Result<BackendReply, BackendError>;

    async fn query(&self, query: &str) -> Result<BackendReply, BackendError>;

    async fn send(&self, request: &BackendRequest) -> Result<BackendReply, BackendError> {
        match request {
            BackendRequest::Scrape { url } => self.scrape(url).await,
            BackendRequest::Upload { path } => self.upload(path).await,
            BackendRequest::Query { query } => self.query(query).await,
        }
    }
}

#[derive(Serialize)]
struct ScrapeBody<'a> {
    url: &'a str,
}

#[derive(Serialize)]
struct QueryBody<'a> {
    query: &'a str,
}

#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    client: reqwest::Client,
    base_url: reqwest::Url,
}

impl ReqwestBackend {
    pub fn new(settings: ClientSettings) -> Result<Self, BackendError> {
        let base_url = reqwest::Url::parse(&settings.base_url)
            .map_err(|err| BackendError::new(FailureKind::InvalidBaseUrl, err.to_string()))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| BackendError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<reqwest::Url, BackendError> {
        self.base_url
            .join(path)
            .map_err(|err| BackendError::new(FailureKind::InvalidBaseUrl, err.to_string()))
    }

    async fn post(&self, request: reqwest::RequestBuilder) -> Result<BackendReply, BackendError> {
        let response = request.send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(BackendError::new(
                FailureKind::HttpStatus(status.as_u16()),
                format!("Request failed with status code {}", status.as_u16()),
            ));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        qa_debug!("backend replied status={} bytes={}", status, body.len());
        Ok(parse_reply(&body))
    }
}

#[async_trait::async_trait]
impl Backend for ReqwestBackend {
    async fn scrape(&self, url: &str) -> Result<BackendReply, BackendError> {
        let endpoint = self.endpoint("/scrape")?;
        self.post(self.client.post(endpoint).json(&ScrapeBody { url }))
            .await
    }

    async fn upload(&self, path: &Path) -> Result<BackendReply, BackendError> {
        let endpoint = self.endpoint("/upload")?;
        let part = file_part(path).await?;
        let form = reqwest::multipart::Form::new().part("file", part);
        self.post(self.client.post(endpoint).multipart(form)).await
    }

    async fn query(&self, query: &str) -> Result<BackendReply, BackendError> {
        let endpoint = self.endpoint("/query")?;
        self.post(self.client.post(endpoint).json(&QueryBody { query }))
            .await
    }
}

/// A body that is not a reply object carries neither field, so it reads as an
/// empty reply rather than a failed request.
fn parse_reply(body: &[u8]) -> BackendReply {
    match serde_json::from_slice(body) {
        Ok(reply) => reply,
        Err(err) => {
            qa_warn!("unreadable reply body ({} bytes): {}", body.len(), err);
            BackendReply::default()
        }
    }
}

fn map_reqwest_error(err: reqwest::Error) -> BackendError {
    if err.is_timeout() {
        return BackendError::new(FailureKind::Timeout, FailureKind::Timeout.to_string());
    }
    BackendError::new(FailureKind::Network, err.to_string())
}
