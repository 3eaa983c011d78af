//! Contact service
//!
//! Validates contact-form submissions and relays them to the notification
//! webhook. There is no fallback: if the webhook does not take the message,
//! the caller is told.

use std::sync::Arc;

use crate::domain::entities::{ContactForm, ContactMessage};
use crate::domain::ports::Notifier;
use crate::error::ContactError;

pub struct ContactService<N>
where
    N: Notifier,
{
    notifier: Arc<N>,
}

impl<N> ContactService<N>
where
    N: Notifier,
{
    pub fn new(notifier: Arc<N>) -> Self {
        Self { notifier }
    }

    /// Validate `form` and deliver it. Invalid forms never reach the webhook.
    pub async fn send(&self, form: ContactForm) -> Result<(), ContactError> {
        let message = ContactMessage::try_from(form)?;

        self.notifier
            .notify(&message.to_notification_text())
            .await
            .map_err(|e| match e.status() {
                Some(status) => ContactError::Rejected { status },
                None => ContactError::RelayFailed(e.to_string()),
            })?;

        tracing::info!(subject = %message.subject, "Contact message relayed");
        Ok(())
    }
}
