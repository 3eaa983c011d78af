//! HTTP page fetcher

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::domain::ports::PageFetcher;
use crate::error::UpstreamError;

/// User agent presented to scraped sites
pub const BOT_USER_AGENT: &str = "Mozilla/5.0 (compatible; ShyptSolutionBot/1.0)";

/// Downloads pages with reqwest's default client settings
pub struct HttpPageFetcher {
    http: Client,
}

impl HttpPageFetcher {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }
}

impl Default for HttpPageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_html(&self, url: &Url) -> Result<String, UpstreamError> {
        let resp = self
            .http
            .get(url.clone())
            .header("User-Agent", BOT_USER_AGENT)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        Ok(resp.text().await?)
    }
}
