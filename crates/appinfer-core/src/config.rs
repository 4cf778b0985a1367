use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::user_agent::{DEFAULT_MANIFEST_URL, MANIFEST_TIMEOUT};

/// Default upper bound for fetching a page to read its title.
pub const DEFAULT_TITLE_TIMEOUT_SECS: u64 = 10;

/// Global configuration loaded from `~/.config/appinfer/config.toml`.
///
/// Only where and how long to fetch are configurable; the fallback browser
/// version and app name are fixed constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppinferConfig {
    /// URL of the Electron release manifest (JSON array with `version` and `chrome`).
    pub manifest_url: String,
    /// Timeout in seconds for the manifest request.
    pub manifest_timeout_secs: u64,
    /// Timeout in seconds for fetching the target page when inferring a name.
    pub title_timeout_secs: u64,
}

impl Default for AppinferConfig {
    fn default() -> Self {
        Self {
            manifest_url: DEFAULT_MANIFEST_URL.to_string(),
            manifest_timeout_secs: MANIFEST_TIMEOUT.as_secs(),
            title_timeout_secs: DEFAULT_TITLE_TIMEOUT_SECS,
        }
    }
}

impl AppinferConfig {
    pub fn manifest_timeout(&self) -> Duration {
        Duration::from_secs(self.manifest_timeout_secs)
    }

    pub fn title_timeout(&self) -> Duration {
        Duration::from_secs(self.title_timeout_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("appinfer")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<AppinferConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = AppinferConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<AppinferConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config file: {}", path.display()))?;
    let cfg: AppinferConfig = toml::from_str(&data)
        .with_context(|| format!("parse config file: {}", path.display()))?;
    Ok(cfg)
}
