//! App name resolution: explicit name, or the target page's title, sanitized
//! for the target platform.
//!
//! Title inference is best effort. Any failure, or an empty title, is logged
//! and replaced by [`DEFAULT_APP_NAME`].

mod sanitize;
mod title;

pub use sanitize::{sanitize_filename, FilenameSanitizer, PlatformSanitizer};
pub use title::{extract_title, HttpTitleInferrer, TitleInferrer};

use crate::config::AppinferConfig;
use crate::platform::Platform;

/// Name used when none is given and none can be inferred.
pub const DEFAULT_APP_NAME: &str = "APP";

/// Input to name resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameParams {
    /// The user supplied a name; no network access.
    Provided { name: String, platform: Platform },
    /// Derive the name from the page at `target_url`.
    NeedsInfer { target_url: String, platform: Platform },
}

impl NameParams {
    pub fn provided(name: impl Into<String>, platform: Platform) -> Self {
        NameParams::Provided {
            name: name.into(),
            platform,
        }
    }

    pub fn needs_infer(target_url: impl Into<String>, platform: Platform) -> Self {
        NameParams::NeedsInfer {
            target_url: target_url.into(),
            platform,
        }
    }

    pub fn platform(&self) -> Platform {
        match self {
            NameParams::Provided { platform, .. } | NameParams::NeedsInfer { platform, .. } => {
                *platform
            }
        }
    }
}

/// Resolves app names with injected title and sanitizer collaborators.
#[derive(Debug, Clone)]
pub struct NameResolver<T, S> {
    inferrer: T,
    sanitizer: S,
}

impl NameResolver<HttpTitleInferrer, PlatformSanitizer> {
    pub fn from_config(cfg: &AppinferConfig) -> Self {
        Self::new(HttpTitleInferrer::from_config(cfg), PlatformSanitizer)
    }
}

impl<T: TitleInferrer, S: FilenameSanitizer> NameResolver<T, S> {
    pub fn new(inferrer: T, sanitizer: S) -> Self {
        Self {
            inferrer,
            sanitizer,
        }
    }

    /// Returns a sanitized app name. Never fails.
    pub async fn resolve(&self, params: &NameParams) -> String {
        match params {
            NameParams::Provided { name, platform } => self.sanitizer.sanitize(*platform, name),
            NameParams::NeedsInfer {
                target_url,
                platform,
            } => {
                let raw = self.infer_name(target_url).await;
                self.sanitizer.sanitize(*platform, &raw)
            }
        }
    }

    async fn infer_name(&self, target_url: &str) -> String {
        match self.inferrer.infer_title(target_url).await {
            Ok(title) if !title.trim().is_empty() => {
                tracing::debug!(target_url, title = %title, "inferred app name");
                title
            }
            Ok(_) => {
                tracing::warn!(
                    "Unable to automatically determine app name, falling back to '{}'. Reason: empty page title",
                    DEFAULT_APP_NAME
                );
                DEFAULT_APP_NAME.to_string()
            }
            Err(e) => {
                tracing::warn!(
                    "Unable to automatically determine app name, falling back to '{}'. Reason: {}",
                    DEFAULT_APP_NAME,
                    e
                );
                DEFAULT_APP_NAME.to_string()
            }
        }
    }
}

/// Resolves a name with the HTTP title inferrer and the default sanitizer.
pub async fn resolve_name(params: &NameParams, cfg: &AppinferConfig) -> String {
    NameResolver::from_config(cfg).resolve(params).await
}
