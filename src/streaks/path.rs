//! Circuit-trace path generation.

use rand::Rng;

use super::geometry::{Point, snap_to_grid};
use super::layout::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Edge {
        Edge::ALL[rng.random_range(0..Edge::ALL.len())]
    }
}

/// A grid point one unit outside `edge`, at a random offset along it.
pub fn entry_point<R: Rng + ?Sized>(rng: &mut R, edge: Edge, viewport: Viewport, grid: i32) -> Point {
    let width = viewport.width as f64;
    let height = viewport.height as f64;
    let unit = grid as f64;

    let along_x = |rng: &mut R| snap_to_grid(unit * 2.0 + rng.random::<f64>() * (width - unit * 4.0), grid);
    let along_y = |rng: &mut R| snap_to_grid(unit * 2.0 + rng.random::<f64>() * (height * 0.7), grid);

    match edge {
        Edge::Top => Point::new(along_x(rng), -grid),
        Edge::Right => Point::new(snap_to_grid(width + unit, grid), along_y(rng)),
        Edge::Bottom => Point::new(along_x(rng), snap_to_grid(height + unit, grid)),
        Edge::Left => Point::new(-grid, along_y(rng)),
    }
}

/// Builds an axis-aligned path from `start` to `target`.
///
/// One or two jittered waypoints are visited on the way, each reached with
/// a horizontal and a vertical leg in a per-path order. Every vertex is a
/// multiple of `grid` and consecutive vertices differ in exactly one axis.
pub fn generate_grid_path<R: Rng + ?Sized>(
    rng: &mut R,
    start: Point,
    target: Point,
    grid: i32,
) -> Vec<Point> {
    let unit = grid as f64;
    let target = Point::new(
        snap_to_grid(target.x as f64, grid),
        snap_to_grid(target.y as f64, grid),
    );
    let mut current = Point::new(
        snap_to_grid(start.x as f64, grid),
        snap_to_grid(start.y as f64, grid),
    );
    let mut path = vec![current];

    let horizontal_first = rng.random_bool(0.5);
    let waypoints = rng.random_range(1..=2);

    for i in 0..waypoints {
        let fraction = (i + 1) as f64 / (waypoints + 1) as f64;

        let jitter_x = (rng.random::<f64>() - 0.5) * unit * 4.0;
        let jitter_y = (rng.random::<f64>() - 0.5) * unit * 3.0;
        let waypoint = Point::new(
            snap_to_grid(
                current.x as f64 + (target.x - current.x) as f64 * fraction + jitter_x,
                grid,
            ),
            snap_to_grid(
                current.y as f64 + (target.y - current.y) as f64 * fraction + jitter_y,
                grid,
            ),
        );

        if horizontal_first {
            step_x(&mut path, &mut current, waypoint.x);
            step_y(&mut path, &mut current, waypoint.y);
        } else {
            step_y(&mut path, &mut current, waypoint.y);
            step_x(&mut path, &mut current, waypoint.x);
        }
    }

    step_x(&mut path, &mut current, target.x);
    step_y(&mut path, &mut current, target.y);

    path
}

fn step_x(path: &mut Vec<Point>, current: &mut Point, x: i32) {
    if x != current.x {
        current.x = x;
        path.push(*current);
    }
}

fn step_y(path: &mut Vec<Point>, current: &mut Point, y: i32) {
    if y != current.y {
        current.y = y;
        path.push(*current);
    }
}
