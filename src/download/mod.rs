//! Download control view model.
//!
//! Turns a [`ReleaseState`] into what the download button shows. Every
//! failure path ends in a link, never in an empty control.

use crate::asset::{Arch, DownloadSet, format_size};
use crate::github::GitHubRepo;
use crate::release::{Release, ReleaseState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadControl {
    Loading,
    /// No usable release data; links to the repository's release listing
    ViewReleases { url: String },
    /// A release exists but has no disk image to offer
    ViewRelease {
        url: String,
        version: String,
        windows: Vec<DownloadLink>,
    },
    Download {
        primary: DownloadLink,
        version: String,
        size_label: String,
        /// Offered only when both Apple Silicon and Intel disk images exist
        intel: Option<DownloadLink>,
        windows: Vec<DownloadLink>,
    },
}

impl DownloadControl {
    pub fn from_state(repo: &GitHubRepo, state: &ReleaseState) -> Self {
        if state.loading {
            return DownloadControl::Loading;
        }
        match (&state.release, &state.error) {
            (Some(release), None) => Self::from_release(release),
            _ => DownloadControl::ViewReleases {
                url: repo.releases_page_url(),
            },
        }
    }

    pub fn from_release(release: &Release) -> Self {
        let set = DownloadSet::from_assets(&release.assets);

        let windows = set
            .windows
            .iter()
            .map(|asset| DownloadLink {
                label: asset.name.clone(),
                url: asset.download_url.clone(),
            })
            .collect();

        let Some(primary) = set.primary else {
            return DownloadControl::ViewRelease {
                url: release.page_url.clone(),
                version: release.version.clone(),
                windows,
            };
        };

        let label = if set.primary_arch() == Arch::Arm64 {
            "Apple Silicon"
        } else {
            "macOS"
        };

        let intel = match (set.arm64, set.intel) {
            (Some(_), Some(intel)) => Some(DownloadLink {
                label: "Intel Mac".to_string(),
                url: intel.download_url.clone(),
            }),
            _ => None,
        };

        DownloadControl::Download {
            primary: DownloadLink {
                label: label.to_string(),
                url: primary.download_url.clone(),
            },
            version: release.version.clone(),
            size_label: format_size(primary.size),
            intel,
            windows,
        }
    }
}

impl std::fmt::Display for DownloadControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DownloadControl::Loading => write!(f, "Loading..."),
            DownloadControl::ViewReleases { url } => write!(f, "View Releases: {}", url),
            DownloadControl::ViewRelease {
                url,
                version,
                windows,
            } => {
                write!(f, "View Release {}: {}", version, url)?;
                write_windows(f, windows)
            }
            DownloadControl::Download {
                primary,
                version,
                size_label,
                intel,
                windows,
            } => {
                writeln!(f, "Download for {}: {}", primary.label, primary.url)?;
                write!(f, "{} • {}", version, size_label)?;
                if let Some(intel) = intel {
                    write!(f, "\nDownload for {}: {}", intel.label, intel.url)?;
                }
                write_windows(f, windows)
            }
        }
    }
}

fn write_windows(f: &mut std::fmt::Formatter<'_>, windows: &[DownloadLink]) -> std::fmt::Result {
    for link in windows {
        write!(f, "\nWindows: {} ({})", link.label, link.url)?;
    }
    Ok(())
}
