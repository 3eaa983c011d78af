//! Metadata service
//!
//! Resolves a project URL into a [`ProjectPreview`]. GitHub repositories go
//! through the REST API; every other host is fetched and scraped. Upstream
//! failures never reach the caller: they degrade to a hostname-only preview.
//! Nothing is cached, so every call re-fetches.

use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use super::html_scraper::{resolve_image, scrape};
use crate::domain::entities::{PreviewKind, ProjectPreview, MAX_TECH, NO_DESCRIPTION};
use crate::domain::ports::{GitHubClient, PageFetcher, PreviewResolver};
use crate::error::AppError;

/// Service for resolving link previews
pub struct MetadataService<GC, PF>
where
    GC: GitHubClient,
    PF: PageFetcher,
{
    github: Arc<GC>,
    pages: Arc<PF>,
}

impl<GC, PF> MetadataService<GC, PF>
where
    GC: GitHubClient,
    PF: PageFetcher,
{
    pub fn new(github: Arc<GC>, pages: Arc<PF>) -> Self {
        Self { github, pages }
    }

    /// Resolve `raw_url` into a preview.
    ///
    /// Fails only when the URL is missing or cannot be parsed.
    pub async fn resolve(&self, raw_url: &str) -> Result<ProjectPreview, AppError> {
        if raw_url.is_empty() {
            return Err(AppError::InvalidInput("URL is required".to_string()));
        }

        let url = Url::parse(raw_url).map_err(|_| AppError::InvalidInput("Invalid URL".to_string()))?;
        let hostname = url.host_str().unwrap_or_default().to_string();
        let is_github = hostname.contains("github.com");

        let resolved = if is_github {
            match repo_coordinates(&url) {
                Some((owner, repo)) => self.resolve_github(&owner, &repo).await,
                None => None,
            }
        } else {
            self.resolve_website(&url, &hostname).await
        };

        Ok(resolved.unwrap_or_else(|| {
            let kind = if is_github {
                PreviewKind::Github
            } else {
                PreviewKind::Website
            };
            ProjectPreview::fallback(&hostname, kind)
        }))
    }

    async fn resolve_github(&self, owner: &str, repo: &str) -> Option<ProjectPreview> {
        let repo_data = match self.github.get_repo(owner, repo).await {
            Ok(repo_data) => repo_data,
            Err(e) => {
                tracing::error!(owner, repo, error = %e, "GitHub API error");
                return None;
            }
        };

        let tech = match self.github.get_languages(&repo_data.languages_url).await {
            Ok(languages) => languages.into_iter().take(MAX_TECH).collect(),
            Err(e) => {
                tracing::error!(owner, repo, error = %e, "Failed to fetch GitHub languages");
                Vec::new()
            }
        };

        Some(ProjectPreview {
            title: repo_data.name,
            description: repo_data
                .description
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            image: repo_data.owner.and_then(|owner| owner.avatar_url),
            kind: PreviewKind::Github,
            tech,
            stars: Some(repo_data.stargazers_count),
            forks: Some(repo_data.forks_count),
            language: repo_data.language,
        })
    }

    async fn resolve_website(&self, url: &Url, hostname: &str) -> Option<ProjectPreview> {
        let html = match self.pages.fetch_html(url).await {
            Ok(html) => html,
            Err(e) => {
                tracing::error!(url = %url, error = %e, "Website metadata fetch error");
                return None;
            }
        };

        let meta = scrape(&html);

        Some(ProjectPreview::website(
            meta.title.unwrap_or_else(|| hostname.to_string()),
            meta.description
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            meta.image.map(|image| resolve_image(&image, url)),
        ))
    }
}

#[async_trait]
impl<GC, PF> PreviewResolver for MetadataService<GC, PF>
where
    GC: GitHubClient,
    PF: PageFetcher,
{
    async fn resolve(&self, url: &str) -> Result<ProjectPreview, AppError> {
        MetadataService::resolve(self, url).await
    }
}

/// First two non-empty path segments of a repository URL
fn repo_coordinates(url: &Url) -> Option<(String, String)> {
    let mut segments = url.path_segments()?.filter(|s| !s.is_empty());
    let owner = segments.next()?;
    let repo = segments.next()?;
    Some((owner.to_string(), repo.to_string()))
}
