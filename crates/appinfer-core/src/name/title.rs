//! Page title inference over HTTP.

use async_trait::async_trait;
use scraper::{Html, Selector};
use std::time::Duration;

use crate::config::{AppinferConfig, DEFAULT_TITLE_TIMEOUT_SECS};
use crate::error::InferError;
use crate::http::{self, GetOptions};
use crate::platform::Platform;
use crate::user_agent::{build_user_agent, DEFAULT_BROWSER_VERSION};

/// Source of a human-readable title for a target URL.
#[async_trait]
pub trait TitleInferrer: Send + Sync {
    async fn infer_title(&self, url: &str) -> Result<String, InferError>;
}

/// Fetches the page and reads `<title>` (or `og:title`).
#[derive(Debug, Clone)]
pub struct HttpTitleInferrer {
    timeout: Duration,
    user_agent: String,
}

impl Default for HttpTitleInferrer {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TITLE_TIMEOUT_SECS),
            // Some sites serve a stripped page to non-browser clients.
            user_agent: build_user_agent(DEFAULT_BROWSER_VERSION, Platform::Darwin),
        }
    }
}

impl HttpTitleInferrer {
    pub fn from_config(cfg: &AppinferConfig) -> Self {
        Self::default().timeout(cfg.title_timeout())
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[async_trait]
impl TitleInferrer for HttpTitleInferrer {
    async fn infer_title(&self, url: &str) -> Result<String, InferError> {
        let opts = GetOptions::with_timeout(self.timeout).user_agent(self.user_agent.clone());
        let response = http::get(url, &opts).await?;
        if !response.is_success() {
            return Err(InferError::TitleInference(format!(
                "{url} returned HTTP {}",
                response.status
            )));
        }
        extract_title(&response.text())
            .ok_or_else(|| InferError::TitleInference(format!("no title found at {url}")))
    }
}

/// Extracts the document title: the first `<title>` element, else the
/// `og:title` meta property. Whitespace is collapsed; an empty title counts as
/// missing.
pub fn extract_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    title_element(&document).or_else(|| og_title(&document))
}

fn title_element(document: &Html) -> Option<String> {
    let selector = Selector::parse("title").ok()?;
    let element = document.select(&selector).next()?;
    clean_text(&element.text().collect::<String>())
}

fn og_title(document: &Html) -> Option<String> {
    let selector = Selector::parse(r#"meta[property="og:title"]"#).ok()?;
    document
        .select(&selector)
        .filter_map(|element| element.value().attr("content"))
        .find_map(clean_text)
}

fn clean_text(raw: &str) -> Option<String> {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}
