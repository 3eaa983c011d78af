//! Project preview entity
//!
//! The normalized link-preview record rendered as one card in the showcase.

use serde::{Deserialize, Serialize};

/// Description used when an upstream page or repository has none
pub const NO_DESCRIPTION: &str = "No description available";

/// Description used when nothing could be fetched at all
pub const UNAVAILABLE_DESCRIPTION: &str = "Project information not available";

/// Maximum number of languages kept from a repository
pub const MAX_TECH: usize = 3;

/// Where a preview came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewKind {
    Github,
    Website,
}

impl std::fmt::Display for PreviewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PreviewKind::Github => write!(f, "github"),
            PreviewKind::Website => write!(f, "website"),
        }
    }
}

/// Link-preview metadata for a single project URL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectPreview {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    #[serde(rename = "type")]
    pub kind: PreviewKind,
    pub tech: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stars: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forks: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl ProjectPreview {
    /// Hostname-only record used when no upstream produced data
    pub fn fallback(hostname: &str, kind: PreviewKind) -> Self {
        Self {
            title: hostname.to_string(),
            description: UNAVAILABLE_DESCRIPTION.to_string(),
            image: None,
            kind,
            tech: Vec::new(),
            stars: None,
            forks: None,
            language: None,
        }
    }

    /// Scraped website record
    pub fn website(title: String, description: String, image: Option<String>) -> Self {
        Self {
            title,
            description,
            image,
            kind: PreviewKind::Website,
            tech: Vec::new(),
            stars: None,
            forks: None,
            language: None,
        }
    }
}
