//! Page fetcher port trait

use async_trait::async_trait;
use url::Url;

use crate::error::UpstreamError;

/// Port trait for downloading third-party HTML pages
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the raw body of `url`. Non-2xx responses are errors.
    async fn fetch_html(&self, url: &Url) -> Result<String, UpstreamError>;
}
