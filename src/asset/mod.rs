//! Asset classification
//!
//! Decides, from filenames alone, which architecture an asset targets and
//! which asset a download control should lead with.

mod arch;
mod picker;
mod size;

pub use arch::Arch;
pub use picker::{AssetPicker, DiskImagePicker, DownloadSet, is_disk_image, is_windows_installer};
pub use size::format_size;
