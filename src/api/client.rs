use crate::api::types::{Comment, User};
use futures::StreamExt;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Per-request timeout. A single outcome per request: there are no retries.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Response body cap. The comment collection is a few hundred KB at most;
/// anything larger indicates a misbehaving collaborator.
const MAX_BODY_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// Errors that can occur while fetching from the record source.
///
/// All variants surface to the user as a single visible fetch-failure
/// message; the distinction exists for logs and tests.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level error (DNS, connection, TLS, etc.)
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// HTTP response with non-2xx status code
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    /// Request exceeded the 30-second timeout
    #[error("Request timed out")]
    Timeout,
    /// Response body was not valid JSON for the expected shape
    #[error("Malformed response: {0}")]
    Decode(String),
    /// Response body exceeded the 10MB size limit
    #[error("Response too large")]
    ResponseTooLarge,
    /// Base URL could not be parsed or joined
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),
}

/// Client for the two collaborator endpoints.
///
/// Wraps a shared `reqwest::Client` and the configured base URL. Each call
/// performs exactly one request with one outcome — no retries, no backoff
/// (the collaborator is treated as a black box).
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(http: reqwest::Client, base_url: &str) -> Result<Self, FetchError> {
        let base_url = Url::parse(base_url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(FetchError::InvalidUrl(format!(
                "unsupported scheme '{}'",
                base_url.scheme()
            )));
        }
        Ok(Self { http, base_url })
    }

    /// Build the default HTTP client with pooling and keepalive configured.
    pub fn default_http() -> Result<reqwest::Client, reqwest::Error> {
        reqwest::Client::builder()
            .pool_max_idle_per_host(2)
            .pool_idle_timeout(Duration::from_secs(30))
            .tcp_keepalive(Duration::from_secs(60))
            .timeout(REQUEST_TIMEOUT)
            .build()
    }

    /// `GET {base_url}/comments` — the full record collection.
    pub async fn fetch_comments(&self) -> Result<Vec<Comment>, FetchError> {
        let url = self.endpoint("comments")?;
        let bytes = self.get_limited(url).await?;
        serde_json::from_slice(&bytes).map_err(|e| FetchError::Decode(e.to_string()))
    }

    /// `GET {base_url}/users/{id}` — one user record for the profile screen.
    pub async fn fetch_user(&self, id: i64) -> Result<User, FetchError> {
        let url = self.endpoint(&format!("users/{}", id))?;
        let bytes = self.get_limited(url).await?;
        serde_json::from_slice(&bytes).map_err(|e| FetchError::Decode(e.to_string()))
    }

    fn endpoint(&self, path: &str) -> Result<Url, FetchError> {
        // Trailing-slash normalization so "https://host/api" joins as a base
        let mut base = self.base_url.clone();
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }
        base.join(path)
            .map_err(|e| FetchError::InvalidUrl(e.to_string()))
    }

    async fn get_limited(&self, url: Url) -> Result<Vec<u8>, FetchError> {
        tracing::debug!(url = %url, "Fetching");

        let response = tokio::time::timeout(REQUEST_TIMEOUT, self.http.get(url).send())
            .await
            .map_err(|_| FetchError::Timeout)?
            .map_err(FetchError::Network)?;

        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(response.status().as_u16()));
        }

        read_limited_bytes(response, MAX_BODY_SIZE).await
    }
}

/// Read a response body with a hard size limit.
///
/// Checks Content-Length first, then enforces the limit while streaming so
/// a lying or absent header cannot exhaust memory.
async fn read_limited_bytes(
    response: reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, FetchError> {
    if let Some(len) = response.content_length() {
        if len as usize > limit {
            return Err(FetchError::ResponseTooLarge);
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(FetchError::Network)?;
        if bytes.len().saturating_add(chunk.len()) > limit {
            return Err(FetchError::ResponseTooLarge);
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}
