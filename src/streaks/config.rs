/// Card layout the convergence points are placed behind.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Width of the centered content column
    pub max_width: f64,
    /// Horizontal gap between cards
    pub gutter: f64,
    /// Viewports narrower than this stack cards vertically
    pub mobile_breakpoint: u32,
    pub cards_y_desktop: f64,
    pub cards_y_mobile: f64,
    /// Vertical distance between stacked card rows
    pub row_offset: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_width: 896.0,
            gutter: 24.0,
            mobile_breakpoint: 768,
            cards_y_desktop: 420.0,
            cards_y_mobile: 450.0,
            row_offset: 320.0,
        }
    }
}

/// Tunables of the streak animation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatorConfig {
    /// Grid unit every path vertex is snapped to
    pub grid: i32,
    pub streaks_per_group: usize,
    /// Progress added per frame is drawn from `speed_min..speed_max`
    pub speed_min: f64,
    pub speed_max: f64,
    /// Initial activation delay is drawn from `0..max_delay_ms`
    pub max_delay_ms: u64,
    pub tail_min: f64,
    pub tail_max: f64,
    /// Spacing of tail sample points along the path
    pub tail_step: f64,
    pub max_opacity: f64,
    /// Opacity added per frame while far from the target
    pub fade_in_step: f64,
    /// Within this distance of the target the streak fades out
    pub proximity_radius: f64,
    pub glow_radius: f64,
    pub layout: LayoutConfig,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            grid: 32,
            streaks_per_group: 5,
            speed_min: 0.003,
            speed_max: 0.005,
            max_delay_ms: 5000,
            tail_min: 60.0,
            tail_max: 100.0,
            tail_step: 2.0,
            max_opacity: 0.1,
            fade_in_step: 0.015,
            proximity_radius: 100.0,
            glow_radius: 60.0,
            layout: LayoutConfig::default(),
        }
    }
}
