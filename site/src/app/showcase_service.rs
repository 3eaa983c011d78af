//! Showcase service
//!
//! Builds the project cards shown on the home page. Every link in the fixed
//! list is resolved concurrently and the page waits for all of them, so one
//! slow upstream holds back the whole showcase.

use std::sync::Arc;

use futures::future::join_all;
use url::Url;

use super::query_cache::QueryCache;
use crate::config::QueryCachePolicy;
use crate::domain::entities::{PreviewKind, ProjectPreview};
use crate::domain::ports::PreviewResolver;

/// Description shown when a card could not be resolved at all
pub const CARD_FALLBACK_DESCRIPTION: &str = "Indie project highlight from Shypt Solution.";

/// Card badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Github,
    Website,
    /// The resolver itself failed; only the link is known
    Project,
}

impl From<PreviewKind> for CardKind {
    fn from(kind: PreviewKind) -> Self {
        match kind {
            PreviewKind::Github => CardKind::Github,
            PreviewKind::Website => CardKind::Website,
        }
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardKind::Github => write!(f, "github"),
            CardKind::Website => write!(f, "website"),
            CardKind::Project => write!(f, "project"),
        }
    }
}

/// One rendered showcase entry
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectCard {
    pub url: String,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub kind: CardKind,
    pub tech: Vec<String>,
    pub stars: Option<u64>,
    pub forks: Option<u64>,
}

impl ProjectCard {
    fn from_preview(url: &str, preview: ProjectPreview) -> Self {
        Self {
            url: url.to_string(),
            title: preview.title,
            description: preview.description,
            image: preview.image,
            kind: preview.kind.into(),
            tech: preview.tech,
            stars: preview.stars,
            forks: preview.forks,
        }
    }

    fn unresolved(url: &str) -> Self {
        let title = Url::parse(url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_else(|| url.to_string());

        Self {
            url: url.to_string(),
            title,
            description: CARD_FALLBACK_DESCRIPTION.to_string(),
            image: None,
            kind: CardKind::Project,
            tech: Vec::new(),
            stars: None,
            forks: None,
        }
    }
}

pub struct ShowcaseService<R>
where
    R: PreviewResolver,
{
    resolver: Arc<R>,
    links: Vec<String>,
    cache: QueryCache,
}

impl<R> ShowcaseService<R>
where
    R: PreviewResolver,
{
    pub fn new(resolver: Arc<R>, links: Vec<String>, policy: QueryCachePolicy) -> Self {
        Self {
            resolver,
            links,
            cache: QueryCache::new(policy),
        }
    }

    /// Resolve every link and return cards in list order
    pub async fn load_cards(&self) -> Vec<ProjectCard> {
        tracing::debug!(
            count = self.links.len(),
            stale_after_secs = self.cache.policy().stale_after.as_secs(),
            "loading showcase"
        );

        join_all(self.links.iter().map(|link| self.load_card(link))).await
    }

    async fn load_card(&self, link: &str) -> ProjectCard {
        let result = self
            .cache
            .get_or_fetch(link, || self.resolver.resolve(link))
            .await;

        match result {
            Ok(preview) => ProjectCard::from_preview(link, preview),
            Err(e) => {
                tracing::warn!(url = %link, error = %e, "Metadata fetch failed");
                ProjectCard::unresolved(link)
            }
        }
    }
}
