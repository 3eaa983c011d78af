//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::ContactForm;
use crate::domain::ports::{GitHubOwner, GitHubRepo};

/// Create a GitHub repository payload with default values
pub fn test_github_repo(name: &str) -> GitHubRepo {
    GitHubRepo {
        name: name.to_string(),
        description: Some("Share links across devices".to_string()),
        owner: Some(GitHubOwner {
            avatar_url: Some("https://avatars.example/u/1".to_string()),
        }),
        languages_url: format!("https://api.github.com/repos/iraunit/{}/languages", name),
        stargazers_count: 42,
        forks_count: 7,
        language: Some("Kotlin".to_string()),
    }
}

/// Create a complete, valid contact form
pub fn test_contact_form() -> ContactForm {
    ContactForm {
        name: Some("Ada Lovelace".to_string()),
        email: Some("ada@example.com".to_string()),
        subject: Some("Collaboration".to_string()),
        message: Some("Could we collaborate?".to_string()),
    }
}
