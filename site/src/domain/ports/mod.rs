//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod github;
pub mod notifier;
pub mod page_fetcher;
pub mod preview;

pub use github::{GitHubClient, GitHubOwner, GitHubRepo};
pub use notifier::Notifier;
pub use page_fetcher::PageFetcher;
pub use preview::PreviewResolver;
