//! Webhook adapter
//!
//! Relays contact messages to the notification webhook.

pub mod notifier;

pub use notifier::WebhookNotifier;
