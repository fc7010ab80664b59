use anyhow::{Result, bail};
use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use crate::{
    apps,
    runtime::{Clock, Runtime, SystemClock},
    streaks::{AnimatorConfig, FrameLoop, StreakAnimator, SvgSurface, Viewport},
};

const BACKGROUND: &str = "#0a0a0a";

/// Largest accepted width or height, in pixels.
pub const MAX_DIMENSION: u32 = 16_384;

/// A clock that moves forward by a fixed step every time it is read.
///
/// The animator reads the clock once per frame, so rendering N frames
/// against it replays N frames of wall time without waiting.
#[derive(Debug)]
pub struct SteppedClock {
    now: AtomicU64,
    step: u64,
}

impl SteppedClock {
    pub fn new(start: u64, step: u64) -> Self {
        Self {
            now: AtomicU64::new(start),
            step,
        }
    }
}

impl Clock for SteppedClock {
    fn now_millis(&self) -> u64 {
        self.now.fetch_add(self.step, Ordering::SeqCst)
    }
}

#[derive(Debug, Clone)]
pub struct StreaksOptions {
    pub width: u32,
    pub height: u32,
    pub frames: u64,
    pub frame_ms: u64,
    pub seed: Option<u64>,
    pub output: Option<PathBuf>,
    /// Drive the animation from the frame loop in real time
    pub realtime: bool,
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Renders `frames` frames without waiting and returns the last one as SVG.
pub fn render_streaks(options: &StreaksOptions) -> String {
    let viewport = Viewport::new(options.width, options.height);
    let mut surface = SvgSurface::new(viewport).with_background(BACKGROUND);
    let mut animator = StreakAnimator::new(
        AnimatorConfig::default(),
        apps::palettes(),
        SteppedClock::new(0, options.frame_ms),
        rng_for(options.seed),
    );

    for _ in 0..options.frames {
        let stats = animator.frame(&mut surface);
        if stats.errors > 0 {
            debug!("Frame {} had {} drawing errors", animator.frames(), stats.errors);
        }
    }
    info!(
        "Rendered {} frames with {} streaks",
        animator.frames(),
        animator.pool_size()
    );

    surface.to_svg()
}

async fn render_realtime(options: &StreaksOptions) -> Result<String> {
    let viewport = Viewport::new(options.width, options.height);
    let surface = SvgSurface::new(viewport).with_background(BACKGROUND);
    let animator = StreakAnimator::new(
        AnimatorConfig::default(),
        apps::palettes(),
        SystemClock,
        rng_for(options.seed),
    );

    let period = Duration::from_millis(options.frame_ms.max(1));
    let frame_loop = FrameLoop::spawn(animator, surface, period);
    tokio::time::sleep(period * options.frames.min(u32::MAX as u64) as u32).await;
    let stopped = frame_loop.stop().await?;
    info!("Frame loop rendered {} frames", stopped.frames);

    Ok(stopped.surface.to_svg())
}

/// Render the background animation to an SVG snapshot
#[tracing::instrument(skip(runtime))]
pub async fn streaks<R: Runtime>(runtime: R, options: StreaksOptions) -> Result<()> {
    if options.width == 0 || options.height == 0 {
        bail!("Width and height must be greater than zero");
    }
    if options.width > MAX_DIMENSION || options.height > MAX_DIMENSION {
        bail!(
            "Width and height must be at most {} pixels, got {}x{}",
            MAX_DIMENSION,
            options.width,
            options.height
        );
    }

    let svg = if options.realtime {
        render_realtime(&options).await?
    } else {
        render_streaks(&options)
    };

    match &options.output {
        Some(path) => {
            runtime.write(path, svg.as_bytes())?;
            println!("Wrote {}", path.display());
        }
        None => print!("{}", svg),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use mockall::predicate::*;

    fn options(frames: u64) -> StreaksOptions {
        StreaksOptions {
            width: 1280,
            height: 900,
            frames,
            frame_ms: 16,
            seed: Some(7),
            output: None,
            realtime: false,
        }
    }

    #[test]
    fn test_stepped_clock() {
        let clock = SteppedClock::new(100, 16);
        assert_eq!(clock.now_millis(), 100);
        assert_eq!(clock.now_millis(), 116);
        assert_eq!(clock.now_millis(), 132);
    }

    #[test]
    fn test_render_is_deterministic_for_a_seed() {
        let a = render_streaks(&options(400));
        let b = render_streaks(&options(400));
        assert_eq!(a, b);
        assert!(a.starts_with("<svg"));
        assert!(a.contains("#0a0a0a"));
    }

    #[test]
    fn test_render_draws_streaks_after_activation() {
        // 400 frames at 16ms is past the longest activation delay
        let svg = render_streaks(&options(400));
        assert!(svg.contains("<circle"));
        assert!(svg.contains("radialGradient"));
    }

    #[tokio::test]
    async fn test_streaks_writes_output() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_write()
            .with(eq(PathBuf::from("/tmp/out.svg")), always())
            .times(1)
            .returning(|_, contents| {
                assert!(contents.starts_with(b"<svg"));
                Ok(())
            });

        let mut opts = options(10);
        opts.output = Some(PathBuf::from("/tmp/out.svg"));
        streaks(runtime, opts).await.unwrap();
    }

    #[tokio::test]
    async fn test_streaks_rejects_empty_viewport() {
        let runtime = MockRuntime::new();
        let mut opts = options(10);
        opts.width = 0;
        assert!(streaks(runtime, opts).await.is_err());
    }

    #[tokio::test]
    async fn test_streaks_rejects_oversized_viewport() {
        let runtime = MockRuntime::new();
        let mut opts = options(10);
        opts.width = 100_000_000;
        let err = streaks(runtime, opts).await.unwrap_err();
        assert!(err.to_string().contains("at most 16384 pixels"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_realtime_render() {
        let mut opts = options(20);
        opts.realtime = true;
        let svg = render_realtime(&opts).await.unwrap();
        assert!(svg.starts_with("<svg"));
    }
}
