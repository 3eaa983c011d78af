//! Notifier port trait

use async_trait::async_trait;

use crate::error::UpstreamError;

/// Port trait for the webhook that forwards contact messages
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver `text`. Anything other than HTTP 200 is an error.
    async fn notify(&self, text: &str) -> Result<(), UpstreamError>;
}
