//! Viewport and convergence point placement.

use super::config::LayoutConfig;
use super::geometry::{Point, snap_to_grid};

/// Pixel size of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn is_mobile(&self, layout: &LayoutConfig) -> bool {
        self.width < layout.mobile_breakpoint
    }
}

/// Grid-snapped centers of the first `groups` cards for this viewport.
///
/// Desktop lays cards out two per row inside the centered column; mobile
/// stacks them in a single column.
pub fn convergence_points(
    viewport: Viewport,
    layout: &LayoutConfig,
    groups: usize,
    grid: i32,
) -> Vec<Point> {
    let width = viewport.width as f64;

    if viewport.is_mobile(layout) {
        return (0..groups)
            .map(|i| {
                Point::new(
                    snap_to_grid(width / 2.0, grid),
                    snap_to_grid(layout.cards_y_mobile + i as f64 * layout.row_offset, grid),
                )
            })
            .collect();
    }

    let column = width.min(layout.max_width);
    let offset_x = (width - column) / 2.0;
    let card_width = (column - layout.gutter) / 2.0;

    (0..groups)
        .map(|i| {
            let col = (i % 2) as f64;
            let row = (i / 2) as f64;
            let x = offset_x + layout.gutter + col * card_width + card_width / 2.0;
            let y = layout.cards_y_desktop + row * layout.row_offset;
            Point::new(snap_to_grid(x, grid), snap_to_grid(y, grid))
        })
        .collect()
}
