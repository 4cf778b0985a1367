//! `appinfer user-agent <electron-version>` – infer a User-Agent.

use anyhow::Result;
use appinfer_core::config::AppinferConfig;
use appinfer_core::{Platform, UserAgentInferrer};

pub async fn run_user_agent(
    cfg: &AppinferConfig,
    electron_version: &str,
    platform: Platform,
    manifest_url: Option<String>,
) -> Result<()> {
    let mut cfg = cfg.clone();
    if let Some(url) = manifest_url {
        cfg.manifest_url = url;
    }
    let ua = UserAgentInferrer::from_config(&cfg)
        .infer(electron_version, platform)
        .await;
    println!("{ua}");
    Ok(())
}
