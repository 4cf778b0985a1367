//! Remote Electron → Chrome version manifest.

use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use crate::error::InferError;
use crate::http::{self, GetOptions};

use super::{DEFAULT_MANIFEST_URL, MANIFEST_TIMEOUT};

/// One published Electron release. Other manifest fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VersionManifestEntry {
    pub version: String,
    #[serde(rename = "chrome")]
    pub chrome_version: String,
}

/// Parses a manifest body and returns the Chrome version for `runtime_version`.
///
/// The lookup map is built in list order, so a duplicated `version` resolves to
/// its last entry. Lookup is exact.
pub fn lookup_browser_version(body: &[u8], runtime_version: &str) -> Result<String, InferError> {
    let entries: Vec<VersionManifestEntry> = serde_json::from_slice(body)?;
    let by_version: HashMap<String, String> = entries
        .into_iter()
        .map(|e| (e.version, e.chrome_version))
        .collect();

    by_version
        .get(runtime_version)
        .cloned()
        .ok_or_else(|| InferError::VersionNotFound(runtime_version.to_string()))
}

/// Fetches the manifest and resolves one Electron version per call.
#[derive(Debug, Clone)]
pub struct VersionResolver {
    manifest_url: String,
    timeout: Duration,
}

impl Default for VersionResolver {
    fn default() -> Self {
        Self::new(DEFAULT_MANIFEST_URL)
    }
}

impl VersionResolver {
    pub fn new(manifest_url: impl Into<String>) -> Self {
        Self {
            manifest_url: manifest_url.into(),
            timeout: MANIFEST_TIMEOUT,
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Looks up the Chrome version bundled with `runtime_version`.
    ///
    /// One request per call; nothing is cached.
    pub async fn resolve_browser_version(&self, runtime_version: &str) -> Result<String, InferError> {
        let opts = GetOptions::with_timeout(self.timeout);
        let response = http::get(&self.manifest_url, &opts)
            .await?
            .error_for_status(&self.manifest_url)?;
        let chrome = lookup_browser_version(&response.body, runtime_version)?;
        tracing::debug!(runtime_version, chrome = %chrome, "resolved browser version");
        Ok(chrome)
    }
}
