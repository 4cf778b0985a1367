//! CLI for appinfer.

mod commands;

use anyhow::Result;
use appinfer_core::{config, Platform};
use clap::{ArgGroup, Parser, Subcommand};

use commands::{run_build_user_agent, run_name, run_user_agent};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "appinfer")]
#[command(about = "Infer a User-Agent and app name for wrapping a website as a desktop app", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Infer a Chrome User-Agent for an Electron version (falls back to a default Chrome).
    UserAgent {
        /// Electron version, e.g. 8.2.0.
        electron_version: String,
        /// Target platform: darwin, mas, win32 or linux (default: host platform).
        #[arg(long, value_parser = parse_platform)]
        platform: Option<Platform>,
        /// Override the Electron release manifest URL.
        #[arg(long, value_name = "URL")]
        manifest_url: Option<String>,
    },

    /// Build a User-Agent for a known Chrome version (no network).
    BuildUserAgent {
        /// Chrome version, e.g. 80.0.3987.141.
        chrome_version: String,
        /// Target platform: darwin, mas, win32 or linux (default: host platform).
        #[arg(long, value_parser = parse_platform)]
        platform: Option<Platform>,
    },

    /// Resolve an app name from an explicit name or a page title.
    #[command(group(ArgGroup::new("source").required(true).args(["name", "url"])))]
    Name {
        /// Use this name (sanitized) instead of inferring one.
        #[arg(long)]
        name: Option<String>,
        /// Infer the name from this page's title.
        #[arg(long)]
        url: Option<String>,
        /// Target platform: darwin, mas, win32 or linux (default: host platform).
        #[arg(long, value_parser = parse_platform)]
        platform: Option<Platform>,
    },
}

fn parse_platform(s: &str) -> Result<Platform, String> {
    s.parse::<Platform>().map_err(|e| e.to_string())
}

impl Cli {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::UserAgent {
                electron_version,
                platform,
                manifest_url,
            } => {
                let platform = platform.unwrap_or_else(Platform::current);
                run_user_agent(&cfg, &electron_version, platform, manifest_url).await?;
            }
            CliCommand::BuildUserAgent {
                chrome_version,
                platform,
            } => run_build_user_agent(&chrome_version, platform.unwrap_or_else(Platform::current)),
            CliCommand::Name {
                name,
                url,
                platform,
            } => {
                let platform = platform.unwrap_or_else(Platform::current);
                run_name(&cfg, name, url, platform).await?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
