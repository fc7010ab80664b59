use serde::{Deserialize, Serialize};

use crate::github::LatestRelease;

/// Filename suffixes of assets worth offering as downloads.
pub const ALLOWED_EXTENSIONS: &[&str] = &[".dmg", ".app.tar.gz", ".zip", ".exe", ".msi"];

/// A downloadable file attached to a release.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ReleaseAsset {
    pub name: String,
    pub download_url: String,
    #[serde(default)]
    pub size: u64,
}

/// The latest published release of a repository, reduced to what the page shows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Release {
    /// Version tag (e.g., "v1.0.0")
    pub version: String,
    /// Publication date (ISO 8601)
    #[serde(default)]
    pub published_at: Option<String>,
    /// Release page on the hosting site
    pub page_url: String,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

pub fn is_allowed_asset(name: &str) -> bool {
    ALLOWED_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

impl From<LatestRelease> for Release {
    fn from(raw: LatestRelease) -> Self {
        let assets = raw
            .assets
            .into_iter()
            .filter(|asset| is_allowed_asset(&asset.name))
            .map(|asset| ReleaseAsset {
                name: asset.name,
                download_url: asset.browser_download_url,
                size: asset.size,
            })
            .collect();

        Release {
            version: raw.tag_name,
            published_at: raw.published_at,
            page_url: raw.html_url,
            assets,
        }
    }
}
