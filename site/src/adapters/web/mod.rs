//! Web adapter
//!
//! Fetches arbitrary third-party pages for scraping.

pub mod page_fetcher;

pub use page_fetcher::HttpPageFetcher;
