//! The catalog of apps shown on the page.

use crate::github::GitHubRepo;
use crate::streaks::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Ios,
    Web,
    Windows,
    Linux,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::MacOs => "macos",
            Platform::Ios => "ios",
            Platform::Web => "web",
            Platform::Windows => "windows",
            Platform::Linux => "linux",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppStatus {
    Available,
    /// Launch date as an ISO 8601 local date-time
    ComingSoon { launch_date: &'static str },
}

#[derive(Debug, Clone, Copy)]
pub struct App {
    pub id: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub platforms: &'static [Platform],
    /// `(owner, repo)` hosting the app's releases
    pub github: Option<(&'static str, &'static str)>,
    pub status: AppStatus,
    pub features: &'static [&'static str],
    /// Streak colors converging on this app's card
    pub palette: Palette,
}

impl App {
    pub fn repo(&self) -> Option<GitHubRepo> {
        self.github
            .map(|(owner, repo)| GitHubRepo::new(owner, repo))
    }

    pub fn is_available(&self) -> bool {
        self.status == AppStatus::Available
    }
}

pub const APPS: &[App] = &[
    App {
        id: "sajda",
        name: "Sajda",
        tagline: "Islamic Prayer Times for macOS & Windows",
        description: "A beautiful menu bar app for accurate prayer times, Adhan reminders, \
                      and daily Islamic content. Features JAKIM integration for Malaysia \
                      and global calculation methods.",
        platforms: &[Platform::MacOs, Platform::Windows],
        github: Some(("apitlekays", "Sajda")),
        status: AppStatus::Available,
        features: &[],
        palette: Palette::VIOLET,
    },
    App {
        id: "curtask",
        name: "CurTask",
        tagline: "Craft Better Papers, Beautifully",
        description: "An AI-powered PDF research workspace for researchers and academics. \
                      Manage your paper collections with an infinite canvas, automatic \
                      metadata extraction, and powerful search.",
        platforms: &[Platform::MacOs, Platform::Windows, Platform::Linux],
        github: None,
        status: AppStatus::ComingSoon {
            launch_date: "2026-04-30T00:00:00",
        },
        features: &[
            "Infinite canvas for visual paper organization",
            "AI-powered metadata extraction with Ollama",
            "Full-text search with FTS5",
            "Multi-window architecture",
        ],
        palette: Palette::ORANGE,
    },
];

pub fn find(id: &str) -> Option<&'static App> {
    APPS.iter().find(|app| app.id == id)
}

/// One palette per card, in page order.
pub fn palettes() -> Vec<Palette> {
    APPS.iter().map(|app| app.palette).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find() {
        let sajda = find("sajda").unwrap();
        assert_eq!(sajda.name, "Sajda");
        assert!(sajda.is_available());
        assert_eq!(sajda.repo().unwrap().to_string(), "apitlekays/Sajda");

        assert!(find("missing").is_none());
    }

    #[test]
    fn test_coming_soon_has_no_repo() {
        let curtask = find("curtask").unwrap();
        assert!(!curtask.is_available());
        assert!(curtask.repo().is_none());
        assert!(matches!(curtask.status, AppStatus::ComingSoon { .. }));
    }

    #[test]
    fn test_every_app_has_a_description() {
        for app in APPS {
            assert!(!app.description.is_empty(), "{} has no description", app.id);
            assert!(!app.description.contains("  "));
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<&str> = APPS.iter().map(|a| a.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), APPS.len());
    }

    #[test]
    fn test_palettes_follow_page_order() {
        assert_eq!(palettes(), vec![Palette::VIOLET, Palette::ORANGE]);
    }
}
