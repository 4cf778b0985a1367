//! User-Agent inference for a given Electron version.
//!
//! Electron version → Chrome version (remote manifest) → Chrome-style
//! User-Agent string for the target platform. Manifest failures fall back to
//! [`DEFAULT_BROWSER_VERSION`]; an invalid platform is rejected before any
//! network access.

mod build;
mod infer;
mod manifest;

use std::time::Duration;

pub use build::{build_user_agent, build_user_agent_str};
pub use infer::{infer_user_agent, UserAgentInferrer};
pub use manifest::{lookup_browser_version, VersionManifestEntry, VersionResolver};

/// Chrome version used when the manifest cannot provide one.
pub const DEFAULT_BROWSER_VERSION: &str = "78.0.3904.130";

/// Published list of Electron releases and their bundled Chrome versions.
pub const DEFAULT_MANIFEST_URL: &str = "https://electronjs.org/headers/index.json";

/// Time bound for the manifest request.
pub const MANIFEST_TIMEOUT: Duration = Duration::from_secs(5);
