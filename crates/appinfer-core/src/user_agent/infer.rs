//! Orchestrates manifest lookup and UA construction with a default fallback.

use crate::config::AppinferConfig;
use crate::platform::Platform;

use super::build::build_user_agent;
use super::manifest::VersionResolver;
use super::DEFAULT_BROWSER_VERSION;

/// Infers a User-Agent for an Electron version, never failing.
///
/// The platform is already valid by type, so only the version lookup can fail;
/// any lookup failure is logged and replaced by [`DEFAULT_BROWSER_VERSION`].
#[derive(Debug, Clone, Default)]
pub struct UserAgentInferrer {
    resolver: VersionResolver,
}

impl UserAgentInferrer {
    pub fn new(resolver: VersionResolver) -> Self {
        Self { resolver }
    }

    pub fn from_config(cfg: &AppinferConfig) -> Self {
        Self::new(VersionResolver::new(cfg.manifest_url.clone()).timeout(cfg.manifest_timeout()))
    }

    /// Chrome version for `runtime_version`, or the default one.
    pub async fn browser_version(&self, runtime_version: &str) -> String {
        match self.resolver.resolve_browser_version(runtime_version).await {
            Ok(version) => version,
            Err(e) => {
                tracing::warn!(
                    "Unable to infer chrome version for user agent, using {}. Reason: {}",
                    DEFAULT_BROWSER_VERSION,
                    e
                );
                DEFAULT_BROWSER_VERSION.to_string()
            }
        }
    }

    pub async fn infer(&self, runtime_version: &str, platform: Platform) -> String {
        let version = self.browser_version(runtime_version).await;
        build_user_agent(&version, platform)
    }
}

/// Infers a User-Agent using `manifest_url`, or the published manifest when `None`.
pub async fn infer_user_agent(
    runtime_version: &str,
    platform: Platform,
    manifest_url: Option<&str>,
) -> String {
    let resolver = match manifest_url {
        Some(url) => VersionResolver::new(url),
        None => VersionResolver::default(),
    };
    UserAgentInferrer::new(resolver)
        .infer(runtime_version, platform)
        .await
}
