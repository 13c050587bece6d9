//! TTL cache over the full project list.
//!
//! A single entry holds the last successfully fetched list. Within the TTL it
//! is served without touching the backend. After the TTL the next `fetch`
//! refetches; if that fails the old entry is served as [`Freshness::Stale`]
//! rather than failing the caller. Concurrent misses are not de-duplicated.
//!
//! The admin panel calls [`ProjectCache::invalidate`] after every successful
//! mutation, so the next read goes to the backend.

use std::sync::{Arc, PoisonError, RwLock};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use ronex_client::{ClientError, ProjectApi, Session};
use ronex_core::Project;
use serde::Serialize;

/// Five minutes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// How a [`CachedProjects`] result was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Freshness {
    /// Just fetched from the backend.
    Fresh,
    /// Served from an entry younger than the TTL.
    Cached,
    /// The refetch failed; this is the last good entry, possibly expired.
    Stale,
}

#[derive(Debug, Clone)]
pub struct CachedProjects {
    pub projects: Arc<[Project]>,
    pub fetched_at: DateTime<Utc>,
    pub freshness: Freshness,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    projects: Arc<[Project]>,
    fetched: Instant,
    fetched_at: DateTime<Utc>,
}

impl CacheEntry {
    fn to_result(&self, freshness: Freshness) -> CachedProjects {
        CachedProjects {
            projects: Arc::clone(&self.projects),
            fetched_at: self.fetched_at,
            freshness,
        }
    }
}

#[derive(Debug)]
pub struct ProjectCache {
    ttl: Duration,
    entry: RwLock<Option<CacheEntry>>,
}

impl Default for ProjectCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl ProjectCache {
    #[must_use]
    pub const fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entry: RwLock::new(None),
        }
    }

    #[must_use]
    pub fn from_config(config: &ronex_config::CacheConfig) -> Self {
        Self::new(config.ttl())
    }

    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Serve the cached list, refetching when it is missing or expired.
    ///
    /// # Errors
    ///
    /// Returns the [`ClientError`] from `get_all` only when there is no
    /// previous entry to fall back on.
    pub async fn fetch<A: ProjectApi>(
        &self,
        api: &A,
        session: &Session,
    ) -> Result<CachedProjects, ClientError> {
        if let Some(hit) = self.fresh_entry() {
            tracing::debug!(count = hit.projects.len(), "project cache hit");
            return Ok(hit);
        }

        tracing::debug!("project cache miss; fetching");
        match api.get_all(session).await {
            Ok(projects) => {
                let entry = CacheEntry {
                    projects: projects.into(),
                    fetched: Instant::now(),
                    fetched_at: Utc::now(),
                };
                let result = entry.to_result(Freshness::Fresh);
                *self.entry.write().unwrap_or_else(PoisonError::into_inner) = Some(entry);
                Ok(result)
            }
            Err(error) => match self.peek() {
                Some(stale) => {
                    tracing::warn!(%error, fetched_at = %stale.fetched_at, "refetch failed; serving stale projects");
                    Ok(CachedProjects {
                        freshness: Freshness::Stale,
                        ..stale
                    })
                }
                None => Err(error),
            },
        }
    }

    /// Drop the entry so the next `fetch` goes to the backend.
    pub fn invalidate(&self) {
        let previous = self
            .entry
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if previous.is_some() {
            tracing::debug!("project cache invalidated");
        }
    }

    /// The current entry regardless of age, without fetching.
    #[must_use]
    pub fn peek(&self) -> Option<CachedProjects> {
        self.entry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|entry| entry.to_result(Freshness::Cached))
    }

    fn fresh_entry(&self) -> Option<CachedProjects> {
        self.entry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .filter(|entry| entry.fetched.elapsed() < self.ttl)
            .map(|entry| entry.to_result(Freshness::Cached))
    }
}
