use crate::release::ReleaseAsset;

use super::Arch;

pub fn is_disk_image(name: &str) -> bool {
    name.ends_with(".dmg")
}

pub fn is_windows_installer(name: &str) -> bool {
    name.ends_with(".exe") || name.ends_with(".msi")
}

/// Trait for selecting an asset from a list of available assets
pub trait AssetPicker: Send + Sync {
    /// Pick the most appropriate asset from the given list
    ///
    /// Returns `None` if no suitable asset is found
    fn pick<'a>(&self, assets: &'a [ReleaseAsset]) -> Option<&'a ReleaseAsset>;
}

/// Picks the macOS download: the Apple Silicon disk image when there is one,
/// otherwise the first disk image in release order.
pub struct DiskImagePicker;

impl AssetPicker for DiskImagePicker {
    fn pick<'a>(&self, assets: &'a [ReleaseAsset]) -> Option<&'a ReleaseAsset> {
        let mut disk_images = assets.iter().filter(|a| is_disk_image(&a.name));
        let first = disk_images.clone().next();
        disk_images
            .find(|a| Arch::from_filename(&a.name) == Arch::Arm64)
            .or(first)
    }
}

/// Release assets grouped the way a download control presents them.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadSet<'a> {
    pub primary: Option<&'a ReleaseAsset>,
    pub arm64: Option<&'a ReleaseAsset>,
    pub intel: Option<&'a ReleaseAsset>,
    pub windows: Vec<&'a ReleaseAsset>,
}

impl<'a> DownloadSet<'a> {
    pub fn from_assets(assets: &'a [ReleaseAsset]) -> Self {
        Self::with_picker(assets, &DiskImagePicker)
    }

    pub fn with_picker(assets: &'a [ReleaseAsset], picker: &dyn AssetPicker) -> Self {
        let disk_image_with = |arch: Arch| {
            assets
                .iter()
                .find(|a| is_disk_image(&a.name) && Arch::from_filename(&a.name) == arch)
        };

        Self {
            primary: picker.pick(assets),
            arm64: disk_image_with(Arch::Arm64),
            intel: disk_image_with(Arch::X64),
            windows: assets
                .iter()
                .filter(|a| is_windows_installer(&a.name))
                .collect(),
        }
    }

    pub fn primary_arch(&self) -> Arch {
        self.primary
            .map(|a| Arch::from_filename(&a.name))
            .unwrap_or(Arch::Unknown)
    }

    pub fn is_empty(&self) -> bool {
        self.primary.is_none() && self.windows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper function to create test assets from names
    fn make_assets(names: &[&str]) -> Vec<ReleaseAsset> {
        names
            .iter()
            .map(|name| ReleaseAsset {
                name: name.to_string(),
                download_url: format!("https://example.com/{}", name),
                size: 1000,
            })
            .collect()
    }

    #[test]
    fn test_pick_prefers_arm64_disk_image() {
        let assets = make_assets(&["App-x64.dmg", "App-arm64.dmg"]);
        let picked = DiskImagePicker.pick(&assets).unwrap();
        assert_eq!(picked.name, "App-arm64.dmg");
    }

    #[test]
    fn test_pick_falls_back_to_first_disk_image() {
        let assets = make_assets(&["Setup.exe", "App-intel.dmg", "App.dmg"]);
        let picked = DiskImagePicker.pick(&assets).unwrap();
        assert_eq!(picked.name, "App-intel.dmg");
    }

    #[test]
    fn test_pick_ignores_arm64_non_disk_image() {
        let assets = make_assets(&["App-arm64.app.tar.gz", "App.dmg"]);
        let picked = DiskImagePicker.pick(&assets).unwrap();
        assert_eq!(picked.name, "App.dmg");
    }

    #[test]
    fn test_pick_none_without_disk_images() {
        let assets = make_assets(&["App.zip", "Setup.msi"]);
        assert!(DiskImagePicker.pick(&assets).is_none());
        assert!(DiskImagePicker.pick(&[]).is_none());
    }

    #[test]
    fn test_download_set_groups_assets() {
        let assets = make_assets(&[
            "App_aarch64.dmg",
            "App_x86_64.dmg",
            "App_x64-setup.exe",
            "App_x64_en-US.msi",
            "App.app.tar.gz",
        ]);
        let set = DownloadSet::from_assets(&assets);

        assert_eq!(set.primary.unwrap().name, "App_aarch64.dmg");
        assert_eq!(set.primary_arch(), Arch::Arm64);
        assert_eq!(set.arm64.unwrap().name, "App_aarch64.dmg");
        assert_eq!(set.intel.unwrap().name, "App_x86_64.dmg");
        let windows: Vec<&str> = set.windows.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(windows, vec!["App_x64-setup.exe", "App_x64_en-US.msi"]);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_download_set_empty() {
        let assets = make_assets(&["App.zip"]);
        let set = DownloadSet::from_assets(&assets);
        assert!(set.primary.is_none());
        assert_eq!(set.primary_arch(), Arch::Unknown);
        assert!(set.is_empty());
    }

    struct LastAssetPicker;

    impl AssetPicker for LastAssetPicker {
        fn pick<'a>(&self, assets: &'a [ReleaseAsset]) -> Option<&'a ReleaseAsset> {
            assets.last()
        }
    }

    #[test]
    fn test_download_set_with_custom_picker() {
        let assets = make_assets(&["App-arm64.dmg", "App.zip"]);
        let set = DownloadSet::with_picker(&assets, &LastAssetPicker);
        assert_eq!(set.primary.unwrap().name, "App.zip");
        assert_eq!(set.arm64.unwrap().name, "App-arm64.dmg");
    }
}
