//! Ambient circuit-trace animation.
//!
//! Streaks enter from the viewport edges, follow grid-aligned paths to a
//! convergence point behind each app card, fade out as they arrive and are
//! immediately replaced by a new streak in the same slot.
//!
//! # Structure
//!
//! - `geometry` - Grid points, snapping and Manhattan path walking
//! - `path` - Random entry points and circuit-trace path generation
//! - `layout` - Viewport size and convergence point placement
//! - `streak` - A single streak's lifecycle (pending, active, respawn)
//! - `animator` - The fixed-size streak pool and per-frame rendering
//! - `surface` - Drawing surface trait and the SVG backend
//! - `frame_loop` - Tokio task driving the animator at display cadence

mod animator;
mod config;
mod frame_loop;
mod geometry;
mod layout;
mod palette;
mod path;
mod streak;
mod surface;

pub use animator::{FrameStats, StreakAnimator};
pub use config::{AnimatorConfig, LayoutConfig};
pub use frame_loop::{FRAME_INTERVAL, FrameLoop, Stopped};
pub use geometry::{Point, Position, path_length, position_along, snap_to_grid};
pub use layout::{Viewport, convergence_points};
pub use palette::{Palette, Rgb, Rgba};
pub use path::{Edge, entry_point, generate_grid_path};
pub use streak::{Phase, Streak};
pub use surface::{Surface, SvgSurface};
