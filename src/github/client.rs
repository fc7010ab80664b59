use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::release::check_status;

use super::repo::GitHubRepo;
use super::types::LatestRelease;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GetLatestRelease: Send + Sync {
    async fn get_latest_release(&self, repo: &GitHubRepo) -> Result<LatestRelease>;
    fn api_url(&self) -> &str;
}

pub struct GitHub {
    pub client: Client,
    pub api_url: String,
}

impl GitHub {
    #[tracing::instrument(skip(client, api_url))]
    pub fn new(client: Client, api_url: Option<String>) -> Self {
        let api_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self { client, api_url }
    }
}

#[async_trait]
impl GetLatestRelease for GitHub {
    #[tracing::instrument(skip(self, repo))]
    async fn get_latest_release(&self, repo: &GitHubRepo) -> Result<LatestRelease> {
        GitHub::fetch_latest_release(repo, &self.client, &self.api_url).await
    }

    fn api_url(&self) -> &str {
        &self.api_url
    }
}

impl GitHub {
    /// Single attempt, no retry. A 404 surfaces as [`crate::release::ReleaseError::NotFound`],
    /// any other bad status as [`crate::release::ReleaseError::FetchFailed`].
    #[tracing::instrument(skip(client, api_url))]
    pub async fn fetch_latest_release(
        repo: &GitHubRepo,
        client: &Client,
        api_url: &str,
    ) -> Result<LatestRelease> {
        let url = format!(
            "{}/repos/{}/{}/releases/latest",
            api_url.trim_end_matches('/'),
            repo.owner,
            repo.repo
        );

        debug!("Fetching latest release from {}...", url);

        let response = client
            .get(&url)
            .send()
            .await
            .context("Failed to send request to GitHub API")?;

        let response = response.error_for_status().map_err(check_status)?;

        let release = response
            .json::<LatestRelease>()
            .await
            .context("Failed to parse JSON response from GitHub API")?;

        Ok(release)
    }
}
