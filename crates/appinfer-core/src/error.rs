//! Error type shared by the user-agent and name pipelines.

use thiserror::Error;

/// Errors produced while resolving metadata.
///
/// The orchestrators turn fetch and lookup failures into a default value.
/// [`InferError::UnsupportedPlatform`] only comes from parsing a platform
/// identifier, before any lookup starts, and is always returned to the caller.
#[derive(Debug, Error)]
pub enum InferError {
    /// The remote source answered with a non-2xx status.
    #[error("GET {url} returned HTTP {status}")]
    RemoteFetch { url: String, status: u32 },
    /// libcurl failed before a status was received (timeout, DNS, refused connection).
    #[error("transport error: {0}")]
    Transport(#[from] curl::Error),
    /// The manifest body was not a JSON array of version entries.
    #[error("malformed version manifest: {0}")]
    MalformedManifest(#[from] serde_json::Error),
    /// The requested runtime version is not listed in the manifest.
    #[error("Electron version '{0}' not found in retrieved version list")]
    VersionNotFound(String),
    /// The platform identifier is not one of darwin, mas, win32, linux.
    #[error("unsupported platform '{0}' (expected darwin, mas, win32 or linux)")]
    UnsupportedPlatform(String),
    /// Page title could not be determined.
    #[error("title inference failed: {0}")]
    TitleInference(String),
    /// The blocking HTTP task panicked or was cancelled.
    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
