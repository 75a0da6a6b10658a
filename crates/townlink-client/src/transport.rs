//! The network transport seam.
//!
//! All HTTP traffic goes through the [`Transport`] trait so the fetch
//! pipeline can be exercised against scripted in-process transports in
//! tests. The real implementation wraps a single shared `reqwest::Client`,
//! whose connection pool is the only shared mutable state in the crate and
//! is safe for use by every in-flight batch request.

use async_trait::async_trait;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// A raw HTTP response: status code and body text.
///
/// Non-2xx statuses are returned here rather than as errors, because only
/// the caller knows the endpoint and batch context to attach.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body text.
    pub body: String,
}

impl RawResponse {
    /// True for 2xx statuses.
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Performs HTTP requests for the client.
///
/// Errors only for network-level failures (connection refused, per-request
/// timeout, TLS). Implementations must be safe for concurrent use.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform a GET request.
    async fn get(&self, url: &str) -> Result<RawResponse, ClientError>;

    /// Perform a POST request with a JSON body.
    async fn post(&self, url: &str, body: String) -> Result<RawResponse, ClientError>;
}

/// The production transport over a shared `reqwest::Client`.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build a transport from the client configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client })
    }

    async fn read(response: reqwest::Response) -> Result<RawResponse, ClientError> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, ClientError> {
        debug!(url = url, "GET");
        let response = self.client.get(url).send().await?;
        Self::read(response).await
    }

    async fn post(&self, url: &str, body: String) -> Result<RawResponse, ClientError> {
        debug!(url = url, body_len = body.len(), "POST");
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await?;
        Self::read(response).await
    }
}
