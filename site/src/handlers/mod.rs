//! HTTP handlers
//!
//! Axum request handlers for the page and the JSON endpoints.

pub mod contact;
pub mod metadata;
pub mod page;

pub use contact::send_message;
pub use metadata::fetch_metadata;
pub use page::home;
