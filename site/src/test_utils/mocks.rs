//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They record every call so tests can assert on upstream traffic.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;
use url::Url;

use crate::domain::entities::ProjectPreview;
use crate::domain::ports::{GitHubClient, GitHubRepo, Notifier, PageFetcher, PreviewResolver};
use crate::error::{AppError, UpstreamError};

// ============================================================================
// Mock GitHub Client
// ============================================================================

#[derive(Default)]
pub struct MockGitHubClient {
    repos: HashMap<(String, String), GitHubRepo>,
    languages: Vec<String>,
    languages_fail: bool,
    repo_calls: AtomicUsize,
    language_calls: AtomicUsize,
}

impl MockGitHubClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `repo` for `owner/name`; every other repository is a 404
    pub fn with_repo(mut self, owner: &str, name: &str, repo: GitHubRepo) -> Self {
        self.repos
            .insert((owner.to_string(), name.to_string()), repo);
        self
    }

    /// Languages returned for any `languages_url`, in this order
    pub fn with_languages(mut self, languages: &[&str]) -> Self {
        self.languages = languages.iter().map(|l| l.to_string()).collect();
        self
    }

    pub fn failing_languages(mut self) -> Self {
        self.languages_fail = true;
        self
    }

    pub fn repo_calls(&self) -> usize {
        self.repo_calls.load(Ordering::SeqCst)
    }

    pub fn language_calls(&self) -> usize {
        self.language_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GitHubClient for MockGitHubClient {
    async fn get_repo(&self, owner: &str, repo: &str) -> Result<GitHubRepo, UpstreamError> {
        self.repo_calls.fetch_add(1, Ordering::SeqCst);
        self.repos
            .get(&(owner.to_string(), repo.to_string()))
            .cloned()
            .ok_or_else(|| UpstreamError::Status {
                status: 404,
                message: "Not Found".to_string(),
            })
    }

    async fn get_languages(&self, _languages_url: &str) -> Result<Vec<String>, UpstreamError> {
        self.language_calls.fetch_add(1, Ordering::SeqCst);
        if self.languages_fail {
            return Err(UpstreamError::Status {
                status: 500,
                message: "languages unavailable".to_string(),
            });
        }
        Ok(self.languages.clone())
    }
}

// ============================================================================
// Mock Page Fetcher
// ============================================================================

#[derive(Default)]
pub struct MockPageFetcher {
    pages: HashMap<String, String>,
    fetches: AtomicUsize,
}

impl MockPageFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `html` for `url`; unknown URLs behave like an unreachable host
    pub fn with_page(mut self, url: &str, html: &str) -> Self {
        let key = Url::parse(url)
            .map(|u| u.to_string())
            .unwrap_or_else(|_| url.to_string());
        self.pages.insert(key, html.to_string());
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PageFetcher for MockPageFetcher {
    async fn fetch_html(&self, url: &Url) -> Result<String, UpstreamError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.pages
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| UpstreamError::Status {
                status: 502,
                message: "Bad Gateway".to_string(),
            })
    }
}

// ============================================================================
// Mock Notifier
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
enum NotifierMode {
    #[default]
    Accept,
    Reject(u16),
    Broken,
}

#[derive(Default)]
pub struct MockNotifier {
    mode: NotifierMode,
    sent: RwLock<Vec<String>>,
    attempts: AtomicUsize,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Webhook that answers every post with `status`
    pub fn rejecting(status: u16) -> Self {
        Self {
            mode: NotifierMode::Reject(status),
            ..Self::default()
        }
    }

    /// Webhook whose response cannot be read
    pub fn broken() -> Self {
        Self {
            mode: NotifierMode::Broken,
            ..Self::default()
        }
    }

    /// Messages the webhook accepted
    pub fn sent(&self) -> Vec<String> {
        self.sent.read().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn notify(&self, text: &str) -> Result<(), UpstreamError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        match self.mode {
            NotifierMode::Accept => {
                self.sent.write().unwrap().push(text.to_string());
                Ok(())
            }
            NotifierMode::Reject(status) => Err(UpstreamError::Status {
                status,
                message: "rejected".to_string(),
            }),
            NotifierMode::Broken => Err(UpstreamError::Deserialization(
                "connection closed before message completed".to_string(),
            )),
        }
    }
}

// ============================================================================
// Mock Preview Resolver
// ============================================================================

#[derive(Default)]
pub struct MockPreviewResolver {
    failing: HashSet<String>,
    calls: AtomicUsize,
}

impl MockPreviewResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every resolve of `url` fail
    pub fn failing_for(mut self, url: &str) -> Self {
        self.failing.insert(url.to_string());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PreviewResolver for MockPreviewResolver {
    async fn resolve(&self, url: &str) -> Result<ProjectPreview, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(url) {
            return Err(AppError::Unexpected(format!("cannot resolve {}", url)));
        }

        let host = Url::parse(url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_default();
        Ok(ProjectPreview::website(
            host,
            format!("Preview of {}", url),
            None,
        ))
    }
}
