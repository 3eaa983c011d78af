//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod contact_service;
pub mod html_scraper;
pub mod metadata_service;
pub mod query_cache;
pub mod showcase_service;

pub use contact_service::ContactService;
pub use metadata_service::MetadataService;
pub use showcase_service::{CardKind, ProjectCard, ShowcaseService};
