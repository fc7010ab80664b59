use anyhow::{Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::github::GitHubRepo;
use crate::runtime::{Clock, Runtime};

use super::Release;

/// How long a cached release may be served, in milliseconds (5 minutes).
pub const CACHE_TTL_MS: u64 = 5 * 60 * 1000;

/// What is persisted per repository.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CacheEntry {
    pub release: Release,
    /// Milliseconds since the Unix epoch
    pub fetched_at: u64,
}

impl CacheEntry {
    pub fn is_fresh(&self, now: u64, ttl_ms: u64) -> bool {
        now.saturating_sub(self.fetched_at) < ttl_ms
    }
}

/// Best-effort on-disk cache of latest releases, one JSON file per repository.
///
/// Lookups never fail: unreadable or expired entries are misses, and
/// malformed entries are deleted on sight.
pub struct ReleaseCache<R: Runtime, C: Clock> {
    runtime: R,
    clock: C,
    dir: PathBuf,
    ttl_ms: u64,
}

impl<R: Runtime, C: Clock> ReleaseCache<R, C> {
    pub fn new(runtime: R, clock: C, dir: impl Into<PathBuf>) -> Self {
        Self {
            runtime,
            clock,
            dir: dir.into(),
            ttl_ms: CACHE_TTL_MS,
        }
    }

    pub fn with_ttl(mut self, ttl_ms: u64) -> Self {
        self.ttl_ms = ttl_ms;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn now_millis(&self) -> u64 {
        self.clock.now_millis()
    }

    pub fn entry_path(&self, repo: &GitHubRepo) -> PathBuf {
        self.dir.join(format!("{}.json", repo.cache_key()))
    }

    #[tracing::instrument(skip(self))]
    pub fn get(&self, repo: &GitHubRepo) -> Option<Release> {
        let path = self.entry_path(repo);
        if !self.runtime.exists(&path) {
            debug!("Cache miss for {}", repo);
            return None;
        }

        let raw = match self.runtime.read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                debug!("Cache read failed for {}: {:#}", repo, e);
                return None;
            }
        };

        let entry: CacheEntry = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Discarding corrupt cache entry for {}: {}", repo, e);
                if let Err(e) = self.runtime.remove_file(&path) {
                    warn!("Failed to remove corrupt cache entry {:?}: {:#}", path, e);
                }
                return None;
            }
        };

        if entry.is_fresh(self.clock.now_millis(), self.ttl_ms) {
            debug!("Cache hit for {} ({})", repo, entry.release.version);
            Some(entry.release)
        } else {
            debug!("Cache entry for {} expired", repo);
            None
        }
    }

    /// Stores `release` stamped with the current time, replacing any previous entry.
    #[tracing::instrument(skip(self, release))]
    pub fn put(&self, repo: &GitHubRepo, release: &Release) -> Result<()> {
        let entry = CacheEntry {
            release: release.clone(),
            fetched_at: self.clock.now_millis(),
        };
        let json = serde_json::to_vec(&entry).context("Failed to serialize cache entry")?;

        self.runtime
            .create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create cache directory {:?}", self.dir))?;
        self.runtime
            .write(&self.entry_path(repo), &json)
            .with_context(|| format!("Failed to write cache entry for {}", repo))?;

        debug!("Cached {} for {}", release.version, repo);
        Ok(())
    }
}
