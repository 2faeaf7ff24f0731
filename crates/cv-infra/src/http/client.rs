use std::time::Duration;

use cv_core::ports::ApiError;
use serde::Serialize;
use tracing::{debug, warn};

use super::envelope::{Accepted, Envelope};

/// HTTP adapter for every backend port.
///
/// One base URL for all endpoints; requests are never retried.
pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Transport(format!("build HTTP client failed: {e}")))?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Accepted, ApiError> {
        debug!(endpoint = path, "POST");
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| transport(path, e))?;
        read_envelope(path, response).await
    }

    pub(crate) async fn get_json(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Accepted, ApiError> {
        debug!(endpoint = path, "GET");
        let response = self
            .http
            .get(self.url(path))
            .query(query)
            .send()
            .await
            .map_err(|e| transport(path, e))?;
        read_envelope(path, response).await
    }
}

async fn read_envelope(path: &str, response: reqwest::Response) -> Result<Accepted, ApiError> {
    let status = response.status();
    if !status.is_success() {
        warn!(endpoint = path, %status, "backend answered with error status");
        return Err(ApiError::Transport(format!("unexpected HTTP status {status}")));
    }
    let envelope: Envelope = response.json().await.map_err(|e| transport(path, e))?;
    envelope.into_accepted()
}

fn transport(path: &str, error: reqwest::Error) -> ApiError {
    let detail = if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_decode() {
        format!("unreadable response body: {error}")
    } else {
        error.to_string()
    };
    warn!(endpoint = path, %detail, "backend request failed");
    ApiError::Transport(detail)
}
