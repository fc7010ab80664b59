use anyhow::{Result, anyhow};
use std::str::FromStr;

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct GitHubRepo {
    pub owner: String,
    pub repo: String,
}

impl GitHubRepo {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// Public listing of all releases, used as the fallback link.
    pub fn releases_page_url(&self) -> String {
        format!("https://github.com/{}/{}/releases", self.owner, self.repo)
    }

    /// Key under which this repository's latest release is cached.
    pub fn cache_key(&self) -> String {
        format!("gh_release_{}_{}", self.owner, self.repo)
    }
}

impl std::fmt::Display for GitHubRepo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

impl FromStr for GitHubRepo {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
            Err(anyhow!("Invalid repository format. Expected 'owner/repo'."))
        } else {
            Ok(GitHubRepo::new(parts[0], parts[1]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_repo() {
        let repo: GitHubRepo = "apitlekays/Sajda".parse().unwrap();
        assert_eq!(repo.owner, "apitlekays");
        assert_eq!(repo.repo, "Sajda");
        assert_eq!(repo.to_string(), "apitlekays/Sajda");
    }

    #[test]
    fn test_parse_repo_invalid() {
        assert!("".parse::<GitHubRepo>().is_err());
        assert!("owner".parse::<GitHubRepo>().is_err());
        assert!("owner/".parse::<GitHubRepo>().is_err());
        assert!("/repo".parse::<GitHubRepo>().is_err());
        assert!("a/b/c".parse::<GitHubRepo>().is_err());
    }

    #[test]
    fn test_cache_key_format() {
        let repo = GitHubRepo::new("owner", "repo");
        assert_eq!(repo.cache_key(), "gh_release_owner_repo");
    }

    #[test]
    fn test_releases_page_url() {
        let repo = GitHubRepo::new("owner", "repo");
        assert_eq!(
            repo.releases_page_url(),
            "https://github.com/owner/repo/releases"
        );
    }
}
