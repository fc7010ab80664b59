//! Grid points and Manhattan paths.

/// A grid-aligned path vertex in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn manhattan(&self, other: &Point) -> f64 {
        ((other.x - self.x).abs() + (other.y - self.y).abs()) as f64
    }
}

/// A sub-pixel position along a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn distance_to(&self, point: Point) -> f64 {
        let dx = self.x - point.x as f64;
        let dy = self.y - point.y as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<Point> for Position {
    fn from(p: Point) -> Self {
        Self {
            x: p.x as f64,
            y: p.y as f64,
        }
    }
}

/// Nearest multiple of `grid`.
pub fn snap_to_grid(value: f64, grid: i32) -> i32 {
    ((value / grid as f64).round() as i32).saturating_mul(grid)
}

pub fn path_length(path: &[Point]) -> f64 {
    path.windows(2).map(|seg| seg[0].manhattan(&seg[1])).sum()
}

/// Position `distance` units along `path`, or `None` once past its end.
pub fn position_along(path: &[Point], distance: f64) -> Option<Position> {
    let mut remaining = distance;

    for seg in path.windows(2) {
        let (start, end) = (seg[0], seg[1]);
        let length = start.manhattan(&end);

        if remaining <= length {
            let t = if length > 0.0 { remaining / length } else { 0.0 };
            return Some(Position {
                x: start.x as f64 + (end.x - start.x) as f64 * t,
                y: start.y as f64 + (end.y - start.y) as f64 * t,
            });
        }
        remaining -= length;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l_path() -> Vec<Point> {
        vec![Point::new(0, 0), Point::new(64, 0), Point::new(64, 32)]
    }

    #[test]
    fn test_snap_to_grid() {
        assert_eq!(snap_to_grid(0.0, 32), 0);
        assert_eq!(snap_to_grid(15.9, 32), 0);
        assert_eq!(snap_to_grid(16.1, 32), 32);
        assert_eq!(snap_to_grid(100.0, 32), 96);
        assert_eq!(snap_to_grid(-40.0, 32), -32);
        assert_eq!(snap_to_grid(-50.0, 32), -64);
    }

    #[test]
    fn test_snap_to_grid_saturates() {
        assert_eq!(snap_to_grid(1e10, 32), i32::MAX);
        assert_eq!(snap_to_grid(-1e10, 32), i32::MIN);
        assert_eq!(snap_to_grid(f64::MAX, 32), i32::MAX);
    }

    #[test]
    fn test_path_length() {
        assert_eq!(path_length(&l_path()), 96.0);
        assert_eq!(path_length(&[Point::new(5, 5)]), 0.0);
        assert_eq!(path_length(&[]), 0.0);
    }

    #[test]
    fn test_position_along() {
        let path = l_path();
        assert_eq!(position_along(&path, 0.0), Some(Position { x: 0.0, y: 0.0 }));
        assert_eq!(position_along(&path, 32.0), Some(Position { x: 32.0, y: 0.0 }));
        assert_eq!(position_along(&path, 64.0), Some(Position { x: 64.0, y: 0.0 }));
        assert_eq!(position_along(&path, 80.0), Some(Position { x: 64.0, y: 16.0 }));
        assert_eq!(position_along(&path, 96.0), Some(Position { x: 64.0, y: 32.0 }));
    }

    #[test]
    fn test_position_past_end() {
        assert_eq!(position_along(&l_path(), 96.5), None);
        assert_eq!(position_along(&[Point::new(0, 0)], 0.0), None);
    }

    #[test]
    fn test_position_along_negative_direction() {
        let path = vec![Point::new(64, 64), Point::new(0, 64), Point::new(0, 0)];
        assert_eq!(position_along(&path, 16.0), Some(Position { x: 48.0, y: 64.0 }));
        assert_eq!(position_along(&path, 96.0), Some(Position { x: 0.0, y: 32.0 }));
    }

    #[test]
    fn test_distance_to() {
        let p = Position { x: 3.0, y: 4.0 };
        assert_eq!(p.distance_to(Point::new(0, 0)), 5.0);
    }
}
