//! Streak color schemes.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend toward `other`, `t` in `[0, 1]`, rounded per channel.
    pub fn lerp(&self, other: &Rgb, t: f64) -> Rgb {
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round().clamp(0.0, 255.0) as u8;
        Rgb {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }

    pub fn with_alpha(&self, a: f64) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a: a.clamp(0.0, 1.0),
        }
    }
}

/// Colors for one streak group and its convergence glow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub trail_start: Rgb,
    pub trail_end: Rgb,
    pub head: Rgb,
    /// Head halo, tail halo and glow center
    pub glow: Rgb,
    /// Outer stops of the convergence glow
    pub glow_outer: Rgb,
}

impl Palette {
    pub const VIOLET: Palette = Palette {
        trail_start: Rgb::new(124, 58, 237),
        trail_end: Rgb::new(167, 139, 250),
        head: Rgb::new(196, 181, 253),
        glow: Rgb::new(139, 92, 246),
        glow_outer: Rgb::new(167, 139, 250),
    };

    pub const ORANGE: Palette = Palette {
        trail_start: Rgb::new(234, 88, 12),
        trail_end: Rgb::new(251, 146, 60),
        head: Rgb::new(253, 186, 116),
        glow: Rgb::new(249, 115, 22),
        glow_outer: Rgb::new(251, 146, 60),
    };

    pub fn trail_color(&self, t: f64) -> Rgb {
        self.trail_start.lerp(&self.trail_end, t)
    }

    /// Radial stops `(offset, color)` for the glow under a convergence point.
    pub fn convergence_stops(&self) -> [(f64, Rgba); 3] {
        [
            (0.0, self.glow.with_alpha(0.06)),
            (0.5, self.glow_outer.with_alpha(0.03)),
            (1.0, self.glow_outer.with_alpha(0.0)),
        ]
    }
}
