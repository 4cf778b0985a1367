//! Minimal HTTP GET over libcurl.
//!
//! Each call performs exactly one request: no retries, no caching. The blocking
//! transfer runs on tokio's blocking pool when called through [`get`].

use std::str;
use std::time::Duration;

use crate::error::InferError;

/// Default cap on a response body. Larger bodies abort the transfer.
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Status and body of a completed GET.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Turns a non-2xx response into [`InferError::RemoteFetch`].
    pub fn error_for_status(self, url: &str) -> Result<Self, InferError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(InferError::RemoteFetch {
                url: url.to_string(),
                status: self.status,
            })
        }
    }
}

/// Request options for [`get_blocking`] and [`get`].
#[derive(Debug, Clone)]
pub struct GetOptions {
    /// Upper bound for the whole transfer, connection included.
    pub timeout: Duration,
    /// `User-Agent` header; libcurl sends none when unset.
    pub user_agent: Option<String>,
    /// Largest body accepted; past this the transfer fails with a write error.
    pub max_body_bytes: usize,
}

impl GetOptions {
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout,
            user_agent: None,
            max_body_bytes: MAX_BODY_BYTES,
        }
    }

    pub fn max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}

/// Performs a GET request and returns status and body. Follows redirects.
///
/// Bodies over `opts.max_body_bytes` fail with [`InferError::Transport`].
///
/// Runs in the current thread; use [`get`] from async code.
pub fn get_blocking(url: &str, opts: &GetOptions) -> Result<HttpResponse, InferError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.connect_timeout(opts.timeout)?;
    easy.timeout(opts.timeout)?;
    if let Some(ua) = &opts.user_agent {
        easy.useragent(ua)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            if body.len() + data.len() > opts.max_body_bytes {
                // Short count makes libcurl abort with CURLE_WRITE_ERROR.
                return Ok(0);
            }
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    tracing::debug!(url, status, bytes = body.len(), "GET completed");

    Ok(HttpResponse { status, body })
}

/// Async wrapper around [`get_blocking`].
pub async fn get(url: &str, opts: &GetOptions) -> Result<HttpResponse, InferError> {
    let url = url.to_string();
    let opts = opts.clone();
    tokio::task::spawn_blocking(move || get_blocking(&url, &opts)).await?
}
