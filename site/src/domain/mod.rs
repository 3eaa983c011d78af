//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Records the site resolves, validates and renders
//! - `ports`: Trait definitions for the upstream services the site talks to

pub mod entities;
pub mod ports;
