//! `appinfer name (--name <NAME> | --url <URL>)` – resolve an app name.

use anyhow::{bail, Result};
use appinfer_core::config::AppinferConfig;
use appinfer_core::{resolve_name, NameParams, Platform};

pub async fn run_name(
    cfg: &AppinferConfig,
    name: Option<String>,
    url: Option<String>,
    platform: Platform,
) -> Result<()> {
    let params = match (name, url) {
        (Some(name), _) => NameParams::provided(name, platform),
        (None, Some(url)) => NameParams::needs_infer(url, platform),
        (None, None) => bail!("either --name or --url is required"),
    };
    println!("{}", resolve_name(&params, cfg).await);
    Ok(())
}
