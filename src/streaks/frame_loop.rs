use anyhow::{Context, Result, anyhow};
use log::debug;
use rand::Rng;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::runtime::Clock;

use super::animator::StreakAnimator;
use super::layout::Viewport;
use super::surface::Surface;

/// Roughly one display refresh at 60 Hz.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// What a stopped loop hands back.
pub struct Stopped<S> {
    pub surface: S,
    pub frames: u64,
}

/// Drives a [`StreakAnimator`] on a tokio task, one frame per tick.
///
/// Resize events are applied to the surface between frames, so the next
/// frame lays out against the new size. Dropping the loop aborts the task,
/// detaching both the frame tick and the resize listener.
pub struct FrameLoop<S: Surface + 'static> {
    handle: Option<JoinHandle<Stopped<S>>>,
    shutdown: Option<oneshot::Sender<()>>,
    resize_tx: mpsc::UnboundedSender<Viewport>,
}

impl<S: Surface + 'static> FrameLoop<S> {
    /// Must be called from within a tokio runtime.
    pub fn spawn<C, R>(mut animator: StreakAnimator<C, R>, mut surface: S, period: Duration) -> Self
    where
        C: Clock + 'static,
        R: Rng + Send + 'static,
    {
        let (resize_tx, mut resize_rx) = mpsc::unbounded_channel::<Viewport>();
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    biased;
                    _ = &mut shutdown_rx => break,
                    Some(viewport) = resize_rx.recv() => {
                        debug!("Surface resized to {}x{}", viewport.width, viewport.height);
                        surface.resize(viewport);
                    }
                    _ = ticker.tick() => {
                        animator.frame(&mut surface);
                    }
                }
            }

            Stopped {
                frames: animator.frames(),
                surface,
            }
        });

        Self {
            handle: Some(handle),
            shutdown: Some(shutdown_tx),
            resize_tx,
        }
    }

    pub fn resize(&self, viewport: Viewport) -> Result<()> {
        self.resize_tx
            .send(viewport)
            .map_err(|_| anyhow!("Frame loop is no longer running"))
    }

    /// Stops after the current frame and returns the surface.
    pub async fn stop(mut self) -> Result<Stopped<S>> {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        let handle = self
            .handle
            .take()
            .ok_or_else(|| anyhow!("Frame loop already stopped"))?;
        handle.await.context("Frame loop task failed")
    }
}

impl<S: Surface + 'static> Drop for FrameLoop<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockClock;
    use crate::streaks::config::AnimatorConfig;
    use crate::streaks::geometry::{Point, Position};
    use crate::streaks::palette::{Palette, Rgba};
    use crate::streaks::surface::SvgSurface;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

    fn animator() -> StreakAnimator<MockClock, StdRng> {
        let time = Arc::new(AtomicU64::new(0));
        let mut clock = MockClock::new();
        clock
            .expect_now_millis()
            .returning(move || time.fetch_add(16, Ordering::SeqCst));
        StreakAnimator::new(
            AnimatorConfig::default(),
            vec![Palette::VIOLET, Palette::ORANGE],
            clock,
            StdRng::seed_from_u64(17),
        )
    }

    /// Flags when the loop task releases its surface.
    struct DropFlagSurface {
        dropped: Arc<AtomicBool>,
    }

    impl Surface for DropFlagSurface {
        fn size(&self) -> Viewport {
            Viewport::new(800, 600)
        }
        fn resize(&mut self, _viewport: Viewport) {}
        fn clear(&mut self) -> Result<()> {
            Ok(())
        }
        fn fill_circle(&mut self, _center: Position, _radius: f64, _color: Rgba) -> Result<()> {
            Ok(())
        }
        fn radial_glow(&mut self, _center: Point, _radius: f64, _stops: &[(f64, Rgba)]) -> Result<()> {
            Ok(())
        }
    }

    impl Drop for DropFlagSurface {
        fn drop(&mut self) {
            self.dropped.store(true, Ordering::SeqCst);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_renders_frames_until_stopped() {
        let surface = SvgSurface::new(Viewport::new(1280, 800));
        let frame_loop = FrameLoop::spawn(animator(), surface, FRAME_INTERVAL);

        tokio::time::sleep(Duration::from_secs(1)).await;
        let stopped = frame_loop.stop().await.unwrap();

        assert!(stopped.frames >= 50, "rendered {} frames", stopped.frames);
        assert_eq!(stopped.surface.gradient_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_resize_applies_before_next_frame() {
        let surface = SvgSurface::new(Viewport::default());
        let frame_loop = FrameLoop::spawn(animator(), surface, FRAME_INTERVAL);

        tokio::time::sleep(Duration::from_millis(100)).await;
        frame_loop.resize(Viewport::new(640, 480)).unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;

        let stopped = frame_loop.stop().await.unwrap();
        assert_eq!(stopped.surface.size(), Viewport::new(640, 480));
        // Frames before the resize were no-ops on the empty surface
        assert!(stopped.frames > 0 && stopped.frames <= 8);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_detaches_loop() {
        let dropped = Arc::new(AtomicBool::new(false));
        let surface = DropFlagSurface {
            dropped: dropped.clone(),
        };
        let frame_loop = FrameLoop::spawn(animator(), surface, FRAME_INTERVAL);

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!dropped.load(Ordering::SeqCst));

        drop(frame_loop);
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert!(dropped.load(Ordering::SeqCst));
    }
}
