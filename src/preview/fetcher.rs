use futures::future::join_all;
use reqwest::Client as ReqwestClient;
use thiserror::Error;
use url::Url;

use super::cache::PreviewCache;
use super::extract::extract_open_graph;
use crate::config::PreviewConfig;
use crate::models::LinkPreview;

/// Desktop browser agent; some sites refuse requests from unknown clients.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
}

/// Fetches Open Graph previews for external pages.
///
/// `fetch` and `fetch_all` never fail: anything that goes wrong is logged
/// and turned into `LinkPreview::fallback`.
#[derive(Clone)]
pub struct PreviewFetcher {
    client: ReqwestClient,
    cache: PreviewCache,
}

impl PreviewFetcher {
    pub fn new(config: &PreviewConfig) -> Result<Self, PreviewError> {
        let client = ReqwestClient::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(PreviewFetcher {
            client,
            cache: PreviewCache::new(config.cache_ttl),
        })
    }

    pub fn cache(&self) -> &PreviewCache {
        &self.cache
    }

    /// Preview for a single URL. Only successful extractions are cached, so a
    /// site that was down gets retried on the next call.
    pub async fn fetch(&self, url: &str) -> LinkPreview {
        if let Some(preview) = self.cache.get(url) {
            tracing::debug!(url = %url, "Link preview cache hit");
            return preview;
        }

        match self.try_fetch(url).await {
            Ok(preview) => {
                self.cache.insert(url, preview.clone());
                preview
            }
            Err(e) => {
                tracing::warn!(error = ?e, url = %url, "Failed to fetch URL for link preview");
                LinkPreview::fallback(url)
            }
        }
    }

    /// Previews for all `urls`, fetched concurrently, in input order. A slow
    /// or broken site only affects its own entry.
    pub async fn fetch_all(&self, urls: &[String]) -> Vec<LinkPreview> {
        join_all(urls.iter().map(|url| self.fetch(url))).await
    }

    async fn try_fetch(&self, url: &str) -> Result<LinkPreview, PreviewError> {
        let parsed = Url::parse(url).map_err(|e| PreviewError::InvalidUrl(e.to_string()))?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(PreviewError::InvalidUrl(format!(
                    "unsupported scheme {other:?}"
                )))
            }
        }

        let response = self.client.get(parsed).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PreviewError::Status(status));
        }

        let html = response.text().await?;
        Ok(extract_open_graph(&html, url))
    }
}
