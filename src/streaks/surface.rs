//! Drawing surfaces.

use anyhow::Result;
use std::fmt::Write as _;

use super::geometry::{Point, Position};
use super::layout::Viewport;
use super::palette::Rgba;

/// The 2D drawing operations one animation frame needs.
#[cfg_attr(test, mockall::automock)]
pub trait Surface: Send {
    /// Current pixel size; zero in either axis means not yet available.
    fn size(&self) -> Viewport;
    fn resize(&mut self, viewport: Viewport);
    fn clear(&mut self) -> Result<()>;
    fn fill_circle(&mut self, center: Position, radius: f64, color: Rgba) -> Result<()>;
    /// Circle filled with a radial gradient; `stops` are `(offset, color)`.
    fn radial_glow(&mut self, center: Point, radius: f64, stops: &[(f64, Rgba)]) -> Result<()>;
}

/// Renders frames as an SVG document. Only the latest frame is kept.
#[derive(Debug, Clone, Default)]
pub struct SvgSurface {
    viewport: Viewport,
    background: Option<String>,
    defs: Vec<String>,
    shapes: Vec<String>,
}

impl SvgSurface {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Default::default()
        }
    }

    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background = Some(color.into());
        self
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn gradient_count(&self) -> usize {
        self.defs.len()
    }

    pub fn to_svg(&self) -> String {
        let Viewport { width, height } = self.viewport;
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = width,
            h = height
        );
        if let Some(bg) = &self.background {
            let _ = writeln!(out, r#"<rect width="100%" height="100%" fill="{}"/>"#, bg);
        }
        if !self.defs.is_empty() {
            out.push_str("<defs>\n");
            for def in &self.defs {
                out.push_str(def);
                out.push('\n');
            }
            out.push_str("</defs>\n");
        }
        for shape in &self.shapes {
            out.push_str(shape);
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }
}

fn rgb(color: &Rgba) -> String {
    format!("rgb({},{},{})", color.r, color.g, color.b)
}

impl Surface for SvgSurface {
    fn size(&self) -> Viewport {
        self.viewport
    }

    fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn clear(&mut self) -> Result<()> {
        self.defs.clear();
        self.shapes.clear();
        Ok(())
    }

    fn fill_circle(&mut self, center: Position, radius: f64, color: Rgba) -> Result<()> {
        self.shapes.push(format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}" fill-opacity="{:.4}"/>"#,
            center.x,
            center.y,
            radius,
            rgb(&color),
            color.a
        ));
        Ok(())
    }

    fn radial_glow(&mut self, center: Point, radius: f64, stops: &[(f64, Rgba)]) -> Result<()> {
        let id = format!("glow{}", self.defs.len());
        let mut gradient = format!(r#"<radialGradient id="{}">"#, id);
        for (offset, color) in stops {
            let _ = write!(
                gradient,
                r#"<stop offset="{}" stop-color="{}" stop-opacity="{}"/>"#,
                offset,
                rgb(color),
                color.a
            );
        }
        gradient.push_str("</radialGradient>");
        self.defs.push(gradient);

        self.shapes.push(format!(
            r#"<circle cx="{}" cy="{}" r="{:.2}" fill="url(#{})"/>"#,
            center.x, center.y, radius, id
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::streaks::palette::Rgb;

    #[test]
    fn test_empty_document() {
        let surface = SvgSurface::new(Viewport::new(320, 200));
        let svg = surface.to_svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"viewBox="0 0 320 200""#));
        assert!(!svg.contains("<defs>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_circle_and_glow_markup() {
        let mut surface = SvgSurface::new(Viewport::new(100, 100)).with_background("#0a0a0a");
        let color = Rgb::new(1, 2, 3).with_alpha(0.5);
        surface
            .fill_circle(Position { x: 10.0, y: 20.5 }, 2.5, color)
            .unwrap();
        surface
            .radial_glow(Point::new(32, 64), 60.0, &[(0.0, color), (1.0, color)])
            .unwrap();

        let svg = surface.to_svg();
        assert!(svg.contains(r##"fill="#0a0a0a""##));
        assert!(svg.contains(
            r#"<circle cx="10.00" cy="20.50" r="2.50" fill="rgb(1,2,3)" fill-opacity="0.5000"/>"#
        ));
        assert!(svg.contains(r#"<radialGradient id="glow0">"#));
        assert!(svg.contains(r##"fill="url(#glow0)""##));
        assert_eq!(surface.shape_count(), 2);
        assert_eq!(surface.gradient_count(), 1);
    }

    #[test]
    fn test_clear_drops_previous_frame() {
        let mut surface = SvgSurface::new(Viewport::new(100, 100));
        let color = Rgb::new(1, 2, 3).with_alpha(1.0);
        surface
            .radial_glow(Point::new(0, 0), 10.0, &[(0.0, color)])
            .unwrap();
        surface.clear().unwrap();
        assert_eq!(surface.shape_count(), 0);
        assert_eq!(surface.gradient_count(), 0);
    }

    #[test]
    fn test_resize() {
        let mut surface = SvgSurface::new(Viewport::default());
        assert!(surface.size().is_empty());
        surface.resize(Viewport::new(640, 480));
        assert_eq!(surface.size(), Viewport::new(640, 480));
    }
}
