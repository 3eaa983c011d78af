//! Notification webhook client

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;

use crate::domain::ports::Notifier;
use crate::error::UpstreamError;

#[derive(Serialize)]
struct NotificationRequest<'a> {
    message: &'a str,
}

/// Posts `{"message": ...}` to a fixed webhook URL
pub struct WebhookNotifier {
    http: Client,
    webhook_url: String,
}

impl WebhookNotifier {
    pub fn new(webhook_url: String) -> Self {
        Self {
            http: Client::new(),
            webhook_url,
        }
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, text: &str) -> Result<(), UpstreamError> {
        let resp = self
            .http
            .post(&self.webhook_url)
            .json(&NotificationRequest { message: text })
            .send()
            .await?;

        // Only a plain 200 counts as delivered
        if resp.status() != StatusCode::OK {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(UpstreamError::Status { status, message });
        }

        Ok(())
    }
}
