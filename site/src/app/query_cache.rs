//! In-memory preview cache for the showcase, backed by moka.
//!
//! Behaviour is driven by [`QueryCachePolicy`]:
//! - fresh entries (younger than `stale_after`) are served without a fetch
//! - stale entries trigger a refetch; if that fails the stale value is served
//! - entries not read for `retain_for` are evicted
//! - a failed fetch is retried `retries` times before giving up

use std::future::Future;

use chrono::{DateTime, Utc};
use moka::future::Cache;

use crate::config::QueryCachePolicy;
use crate::domain::entities::ProjectPreview;
use crate::error::AppError;

/// Cached preview with the time it was fetched
#[derive(Clone, Debug)]
pub struct CachedPreview {
    pub preview: ProjectPreview,
    pub fetched_at: DateTime<Utc>,
}

pub struct QueryCache {
    entries: Cache<String, CachedPreview>,
    policy: QueryCachePolicy,
}

impl QueryCache {
    pub fn new(policy: QueryCachePolicy) -> Self {
        let entries = Cache::builder().time_to_idle(policy.retain_for).build();

        Self { entries, policy }
    }

    pub fn policy(&self) -> QueryCachePolicy {
        self.policy
    }

    fn is_fresh(&self, entry: &CachedPreview) -> bool {
        match Utc::now().signed_duration_since(entry.fetched_at).to_std() {
            Ok(age) => age < self.policy.stale_after,
            // Clock went backwards; treat as just fetched
            Err(_) => true,
        }
    }

    /// Return the cached preview for `key`, fetching it when missing or stale.
    pub async fn get_or_fetch<F, Fut>(&self, key: &str, fetch: F) -> Result<ProjectPreview, AppError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<ProjectPreview, AppError>>,
    {
        let cached = self.entries.get(key).await;

        if let Some(entry) = &cached {
            if self.is_fresh(entry) {
                tracing::debug!(key = %key, fetched_at = %entry.fetched_at, "cache hit");
                return Ok(entry.preview.clone());
            }
            tracing::debug!(key = %key, fetched_at = %entry.fetched_at, "cache entry stale, refetching");
        } else {
            tracing::debug!(key = %key, "cache miss, fetching");
        }

        let mut attempt = 0;
        let err = loop {
            match fetch().await {
                Ok(preview) => {
                    let entry = CachedPreview {
                        preview: preview.clone(),
                        fetched_at: Utc::now(),
                    };
                    self.entries.insert(key.to_string(), entry).await;
                    return Ok(preview);
                }
                Err(e) if attempt < self.policy.retries => {
                    attempt += 1;
                    tracing::warn!(key = %key, attempt, error = %e, "preview fetch failed, retrying");
                }
                Err(e) => break e,
            }
        };

        match cached {
            Some(entry) => {
                tracing::warn!(key = %key, error = %err, "refetch failed, serving stale preview");
                Ok(entry.preview)
            }
            None => Err(err),
        }
    }
}
