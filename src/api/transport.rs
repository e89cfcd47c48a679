//! HTTP transport for the MindEase backend.
//!
//! One request per call, no retries. The transport hands back the raw status
//! code and body; deciding what a status means is the caller's job. All
//! network-level failures (DNS, refused connection, timeout, truncated
//! response) surface as `ApiError::Transport`.

use crate::constants::{CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS, SLOW_READ_TIMEOUT_SECS};
use crate::errors::ApiError;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// A raw HTTP response: status code plus unparsed body text.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Read-timeout profile for a request.
///
/// Diary creation and stats requests wait on backend-side AI generation and
/// get a longer deadline; everything else uses the short default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeoutProfile {
    Default,
    /// Extended deadline for endpoints that block on AI generation.
    Slow,
}

impl TimeoutProfile {
    fn duration(self) -> Duration {
        match self {
            TimeoutProfile::Default => Duration::from_secs(READ_TIMEOUT_SECS),
            TimeoutProfile::Slow => Duration::from_secs(SLOW_READ_TIMEOUT_SECS),
        }
    }
}

/// Thin wrapper around a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct Transport {
    http: reqwest::Client,
}

impl Transport {
    /// Creates a transport with the standard connect timeout.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` if the underlying HTTP client cannot be
    /// constructed (e.g. TLS backend initialization failure).
    pub fn new() -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()?;
        Ok(Self { http })
    }

    /// Issues a GET request.
    pub async fn get(&self, url: &str, timeout: TimeoutProfile) -> Result<RawResponse, ApiError> {
        debug!("GET {}", url);
        let response = self
            .http
            .get(url)
            .timeout(timeout.duration())
            .send()
            .await?;
        Self::read(response).await
    }

    /// Issues a POST request with a JSON body.
    pub async fn post_json<T: Serialize>(
        &self,
        url: &str,
        body: &T,
        timeout: TimeoutProfile,
    ) -> Result<RawResponse, ApiError> {
        debug!("POST {}", url);
        let response = self
            .http
            .post(url)
            .json(body)
            .timeout(timeout.duration())
            .send()
            .await?;
        Self::read(response).await
    }

    /// Issues a bodyless POST request.
    pub async fn post_empty(
        &self,
        url: &str,
        timeout: TimeoutProfile,
    ) -> Result<RawResponse, ApiError> {
        debug!("POST {}", url);
        let response = self
            .http
            .post(url)
            .timeout(timeout.duration())
            .send()
            .await?;
        Self::read(response).await
    }

    /// Issues a DELETE request.
    pub async fn delete(
        &self,
        url: &str,
        timeout: TimeoutProfile,
    ) -> Result<RawResponse, ApiError> {
        debug!("DELETE {}", url);
        let response = self
            .http
            .delete(url)
            .timeout(timeout.duration())
            .send()
            .await?;
        Self::read(response).await
    }

    async fn read(response: reqwest::Response) -> Result<RawResponse, ApiError> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!("response status {} ({} bytes)", status, body.len());
        Ok(RawResponse { status, body })
    }
}
