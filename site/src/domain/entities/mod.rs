//! Domain entities
//!
//! Transient records built per request; nothing here is persisted.

pub mod contact_message;
pub mod project_preview;

pub use contact_message::{ContactForm, ContactMessage};
pub use project_preview::{PreviewKind, ProjectPreview, MAX_TECH, NO_DESCRIPTION};
