mod apps;
mod download;
mod streaks;

pub use apps::{COUNTDOWN_REFRESH, apps};
pub use download::{download, render_download, resolve_target};
pub use streaks::{MAX_DIMENSION, StreaksOptions, SteppedClock, render_streaks, streaks};
