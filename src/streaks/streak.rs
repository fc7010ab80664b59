//! One streak's lifecycle: pending, active, then respawned in place.

use rand::Rng;

use super::config::AnimatorConfig;
use super::geometry::{Point, Position, path_length, position_along};
use super::layout::Viewport;
use super::path::{Edge, entry_point, generate_grid_path};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for its activation delay; not drawn
    Pending,
    /// Advancing along its path every frame
    Active,
}

/// One particle travelling a grid path toward its group's convergence point.
#[derive(Debug, Clone, PartialEq)]
pub struct Streak {
    pub id: usize,
    pub path: Vec<Point>,
    /// Fraction of the path length covered by the head
    pub progress: f64,
    pub speed: f64,
    /// Milliseconds after animation start before the streak activates
    pub activation_delay_ms: u64,
    pub opacity: f64,
    pub phase: Phase,
    pub tail_length: f64,
    /// Index of the convergence point and palette this streak belongs to
    pub group: usize,
}

impl Streak {
    /// A new pending streak from a random viewport edge to `target`.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        id: usize,
        group: usize,
        target: Point,
        viewport: Viewport,
        config: &AnimatorConfig,
    ) -> Self {
        let edge = Edge::random(rng);
        let start = entry_point(rng, edge, viewport, config.grid);
        let path = generate_grid_path(rng, start, target, config.grid);

        Self {
            id,
            path,
            progress: 0.0,
            speed: config.speed_min + rng.random::<f64>() * (config.speed_max - config.speed_min),
            activation_delay_ms: (rng.random::<f64>() * config.max_delay_ms as f64) as u64,
            opacity: 0.0,
            phase: Phase::Pending,
            tail_length: config.tail_min + rng.random::<f64>() * (config.tail_max - config.tail_min),
            group,
        }
    }

    /// Replacement for an exhausted streak: same slot and group, fresh path,
    /// already active with no delay.
    pub fn respawn<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        target: Point,
        viewport: Viewport,
        config: &AnimatorConfig,
    ) -> Self {
        let mut next = Streak::spawn(rng, self.id, self.group, target, viewport, config);
        next.phase = Phase::Active;
        next.activation_delay_ms = 0;
        next
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    /// Activates once more than `activation_delay_ms` have elapsed.
    pub fn try_activate(&mut self, elapsed_ms: u64) {
        if self.phase == Phase::Pending && elapsed_ms > self.activation_delay_ms {
            self.phase = Phase::Active;
        }
    }

    /// Where the path ends; the convergence point at spawn time.
    pub fn target(&self) -> Option<Point> {
        self.path.last().copied()
    }

    pub fn total_length(&self) -> f64 {
        path_length(&self.path)
    }

    pub fn head_distance(&self) -> f64 {
        self.progress * self.total_length()
    }

    /// `None` once the head has run off the end of the path.
    pub fn head(&self) -> Option<Position> {
        position_along(&self.path, self.head_distance())
    }

    /// Fades in toward `max_opacity` while far from the target, and fades
    /// out linearly inside `proximity_radius`.
    pub fn update_opacity(&mut self, distance_to_target: f64, config: &AnimatorConfig) {
        self.opacity = if distance_to_target > config.proximity_radius {
            (self.opacity + config.fade_in_step).min(config.max_opacity)
        } else {
            (distance_to_target / config.proximity_radius * config.max_opacity).max(0.0)
        };
    }

    pub fn advance(&mut self) {
        self.progress += self.speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn spawn_one(seed: u64) -> Streak {
        let mut rng = StdRng::seed_from_u64(seed);
        Streak::spawn(
            &mut rng,
            3,
            1,
            Point::new(864, 416),
            Viewport::new(1280, 800),
            &AnimatorConfig::default(),
        )
    }

    #[test]
    fn test_spawn_ranges() {
        let config = AnimatorConfig::default();
        for seed in 0..200 {
            let s = spawn_one(seed);
            assert_eq!(s.id, 3);
            assert_eq!(s.group, 1);
            assert_eq!(s.phase, Phase::Pending);
            assert_eq!(s.progress, 0.0);
            assert_eq!(s.opacity, 0.0);
            assert!(s.speed >= config.speed_min && s.speed < config.speed_max);
            assert!(s.activation_delay_ms < config.max_delay_ms);
            assert!(s.tail_length >= config.tail_min && s.tail_length < config.tail_max);
            assert_eq!(s.target(), Some(Point::new(864, 416)));
        }
    }

    #[test]
    fn test_respawn_is_active_without_delay() {
        let mut rng = StdRng::seed_from_u64(9);
        let old = spawn_one(1);
        let next = old.respawn(
            &mut rng,
            Point::new(864, 416),
            Viewport::new(1280, 800),
            &AnimatorConfig::default(),
        );
        assert_eq!(next.id, old.id);
        assert_eq!(next.group, old.group);
        assert_eq!(next.phase, Phase::Active);
        assert_eq!(next.activation_delay_ms, 0);
        assert_eq!(next.progress, 0.0);
    }

    #[test]
    fn test_try_activate_strictly_after_delay() {
        let mut s = spawn_one(2);
        s.activation_delay_ms = 1000;
        s.try_activate(1000);
        assert!(!s.is_active());
        s.try_activate(1001);
        assert!(s.is_active());
    }

    #[test]
    fn test_head_runs_off_end() {
        let mut s = spawn_one(4);
        assert_eq!(s.head().map(|p| (p.x, p.y)), s.path.first().map(|p| (p.x as f64, p.y as f64)));
        s.progress = 1.0;
        assert!(s.head().is_some());
        s.progress = 1.001;
        assert!(s.head().is_none());
    }

    #[test]
    fn test_opacity_fades_in_and_caps() {
        let config = AnimatorConfig::default();
        let mut s = spawn_one(5);
        s.update_opacity(500.0, &config);
        assert!((s.opacity - 0.015).abs() < 1e-12);
        for _ in 0..20 {
            s.update_opacity(500.0, &config);
        }
        assert_eq!(s.opacity, config.max_opacity);
    }

    #[test]
    fn test_opacity_fades_out_near_target() {
        let config = AnimatorConfig::default();
        let mut s = spawn_one(6);
        s.opacity = config.max_opacity;
        s.update_opacity(50.0, &config);
        assert!((s.opacity - 0.05).abs() < 1e-12);
        s.update_opacity(0.0, &config);
        assert_eq!(s.opacity, 0.0);
    }

    #[test]
    fn test_advance() {
        let mut s = spawn_one(7);
        let speed = s.speed;
        s.advance();
        s.advance();
        assert!((s.progress - 2.0 * speed).abs() < 1e-12);
    }
}
