//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod github;
pub mod web;
pub mod webhook;

pub use github::GitHubClientImpl;
pub use web::HttpPageFetcher;
pub use webhook::WebhookNotifier;
