use log::{debug, warn};

use crate::github::{GetLatestRelease, GitHubRepo};
use crate::runtime::{Clock, Runtime};

use super::{Release, ReleaseCache, ReleaseError};

/// What a UI binding observes for one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseState {
    pub release: Option<Release>,
    pub loading: bool,
    pub error: Option<ReleaseError>,
}

impl ReleaseState {
    pub fn loading() -> Self {
        Self {
            release: None,
            loading: true,
            error: None,
        }
    }

    pub fn ready(release: Release) -> Self {
        Self {
            release: Some(release),
            loading: false,
            error: None,
        }
    }

    pub fn failed(error: ReleaseError) -> Self {
        Self {
            release: None,
            loading: false,
            error: Some(error),
        }
    }
}

/// Cache-then-fetch lookup of the latest release.
pub struct ReleaseResolver<R: Runtime, C: Clock, G: GetLatestRelease> {
    cache: ReleaseCache<R, C>,
    github: G,
}

impl<R: Runtime, C: Clock, G: GetLatestRelease> ReleaseResolver<R, C, G> {
    pub fn new(cache: ReleaseCache<R, C>, github: G) -> Self {
        Self { cache, github }
    }

    pub fn cache(&self) -> &ReleaseCache<R, C> {
        &self.cache
    }

    /// Resolves the latest release for `repo`.
    ///
    /// A fresh cache entry short-circuits the network. Otherwise exactly one
    /// request is made; its outcome is terminal and never retried. A
    /// successful result is cached even when it carries no usable assets.
    #[tracing::instrument(skip(self))]
    pub async fn resolve(&self, repo: &GitHubRepo) -> ReleaseState {
        if let Some(release) = self.cache.get(repo) {
            return ReleaseState::ready(release);
        }

        let raw = match self.github.get_latest_release(repo).await {
            Ok(raw) => raw,
            Err(e) => {
                let error = ReleaseError::from_anyhow(&e);
                warn!("Latest release lookup for {} failed: {}", repo, error);
                return ReleaseState::failed(error);
            }
        };

        let release = Release::from(raw);
        debug!(
            "Resolved {} {} with {} downloadable asset(s)",
            repo,
            release.version,
            release.assets.len()
        );

        if let Err(e) = self.cache.put(repo, &release) {
            warn!("Failed to cache release for {}: {:#}", repo, e);
        }

        ReleaseState::ready(release)
    }
}
