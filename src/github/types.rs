use serde::Deserialize;

/// A release asset as returned by the GitHub API. Does not contain all fields.
#[derive(Deserialize, Debug, PartialEq, Clone)]
pub struct Asset {
    pub name: String,
    #[serde(default)]
    pub size: u64,
    pub browser_download_url: String,
}

/// Payload of `GET /repos/{owner}/{repo}/releases/latest`. Does not contain all fields.
///
/// See the github [docs](https://docs.github.com/en/rest/releases/releases#get-the-latest-release)
/// for more information.
#[derive(Deserialize, Debug, PartialEq, Clone)]
pub struct LatestRelease {
    pub tag_name: String,
    pub published_at: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub assets: Vec<Asset>,
}
