//! GitHub client port trait
//!
//! Defines the interface for reading public repository metadata.

use async_trait::async_trait;

use crate::error::UpstreamError;

/// Repository owner as embedded in the repository payload
#[derive(Debug, Clone, Default)]
pub struct GitHubOwner {
    pub avatar_url: Option<String>,
}

/// The subset of `GET /repos/{owner}/{repo}` the site uses
#[derive(Debug, Clone)]
pub struct GitHubRepo {
    pub name: String,
    pub description: Option<String>,
    pub owner: Option<GitHubOwner>,
    pub languages_url: String,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub language: Option<String>,
}

/// Port trait for GitHub REST API reads
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Get repository metadata
    async fn get_repo(&self, owner: &str, repo: &str) -> Result<GitHubRepo, UpstreamError>;

    /// Get language names from a repository's `languages_url`,
    /// in the order the API returned them
    async fn get_languages(&self, languages_url: &str) -> Result<Vec<String>, UpstreamError>;
}
