use anyhow::Result;
use log::{debug, warn};
use rand::Rng;

use crate::runtime::Clock;

use super::config::AnimatorConfig;
use super::geometry::{Point, Position, position_along};
use super::layout::{Viewport, convergence_points};
use super::palette::Palette;
use super::streak::Streak;
use super::surface::Surface;

/// What happened during one frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    pub drawn: usize,
    pub recycled: usize,
    /// Drawing operations that failed and were skipped
    pub errors: usize,
}

/// Owns the streak pool for one mounted background.
///
/// The pool is created on the first frame that has a usable surface and
/// never changes size afterwards: exhausted streaks are replaced in their
/// slot. One group of streaks is kept per palette, each converging on the
/// matching card.
pub struct StreakAnimator<C: Clock, R: Rng> {
    config: AnimatorConfig,
    palettes: Vec<Palette>,
    clock: C,
    rng: R,
    streaks: Vec<Streak>,
    started_at: Option<u64>,
    frames: u64,
}

impl<C: Clock, R: Rng> StreakAnimator<C, R> {
    pub fn new(config: AnimatorConfig, palettes: Vec<Palette>, clock: C, rng: R) -> Self {
        Self {
            config,
            palettes,
            clock,
            rng,
            streaks: Vec::new(),
            started_at: None,
            frames: 0,
        }
    }

    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    pub fn streaks(&self) -> &[Streak] {
        &self.streaks
    }

    pub fn pool_size(&self) -> usize {
        self.streaks.len()
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Frames rendered so far, not counting no-op frames.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Convergence points for the surface's current size.
    pub fn targets(&self, viewport: Viewport) -> Vec<Point> {
        convergence_points(
            viewport,
            &self.config.layout,
            self.palettes.len(),
            self.config.grid,
        )
    }

    /// Renders one frame and advances every active streak.
    ///
    /// Does nothing while the surface has no area. Drawing failures are
    /// counted and logged but never stop the animation.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> FrameStats {
        let viewport = surface.size();
        if viewport.is_empty() || self.palettes.is_empty() {
            return FrameStats::default();
        }

        let now = self.clock.now_millis();
        let targets = self.targets(viewport);

        let started_at = match self.started_at {
            Some(t) => t,
            None => {
                self.seed(viewport, &targets);
                self.started_at = Some(now);
                now
            }
        };
        let elapsed = now.saturating_sub(started_at);

        let mut stats = FrameStats::default();
        let mut last_error = None;
        let mut record = |result: Result<()>, stats: &mut FrameStats| {
            if let Err(e) = result {
                stats.errors += 1;
                last_error = Some(e);
            }
        };

        record(surface.clear(), &mut stats);

        for streak in self.streaks.iter_mut() {
            streak.try_activate(elapsed);
            if !streak.is_active() {
                continue;
            }

            let Some(head) = streak.head() else {
                let target = targets[streak.group];
                *streak = streak.respawn(&mut self.rng, target, viewport, &self.config);
                stats.recycled += 1;
                continue;
            };

            let target = targets[streak.group];
            streak.update_opacity(head.distance_to(target), &self.config);

            let palette = &self.palettes[streak.group];
            record(
                draw_streak(surface, streak, head, palette, &self.config),
                &mut stats,
            );
            stats.drawn += 1;

            streak.advance();
        }

        for (group, target) in targets.iter().enumerate() {
            let stops = self.palettes[group].convergence_stops();
            record(
                surface.radial_glow(*target, self.config.glow_radius, &stops),
                &mut stats,
            );
        }

        if let Some(e) = last_error {
            warn!(
                "Frame {}: {} drawing operation(s) failed, last error: {:#}",
                self.frames, stats.errors, e
            );
        }

        self.frames += 1;
        stats
    }

    fn seed(&mut self, viewport: Viewport, targets: &[Point]) {
        let per_group = self.config.streaks_per_group;
        self.streaks = targets
            .iter()
            .enumerate()
            .flat_map(|(group, target)| (0..per_group).map(move |i| (group, *target, i)))
            .map(|(group, target, i)| {
                Streak::spawn(
                    &mut self.rng,
                    group * per_group + i,
                    group,
                    target,
                    viewport,
                    &self.config,
                )
            })
            .collect();

        debug!(
            "Seeded {} streak(s) across {} group(s) for {}x{}",
            self.streaks.len(),
            targets.len(),
            viewport.width,
            viewport.height
        );
    }
}

/// Tail gradient, head dot and head halo for one streak.
fn draw_streak<S: Surface + ?Sized>(
    surface: &mut S,
    streak: &Streak,
    head: Position,
    palette: &Palette,
    config: &AnimatorConfig,
) -> Result<()> {
    let head_distance = streak.head_distance();
    let tail_start = (head_distance - streak.tail_length).max(0.0);

    let mut d = tail_start;
    while d < head_distance {
        if let Some(pos) = position_along(&streak.path, d) {
            let t = (d - tail_start) / streak.tail_length;
            let alpha = t * streak.opacity;

            surface.fill_circle(pos, 1.5 + t, palette.trail_color(t).with_alpha(alpha))?;
            surface.fill_circle(pos, 4.0 + t * 2.0, palette.glow.with_alpha(alpha * 0.15))?;
        }
        d += config.tail_step;
    }

    surface.fill_circle(head, 2.5, palette.head.with_alpha(streak.opacity))?;
    surface.fill_circle(head, 6.0, palette.glow.with_alpha(streak.opacity * 0.1))?;
    Ok(())
}
