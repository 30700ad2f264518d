//! Software rendering of display lists.
//!
//! Pixel commands from the generators are stamped as squares of their
//! point size, polygons and fans are scanline filled, and polylines are
//! rasterized segment by segment with [`BresenhamLine`] in device space.
//!
//! # Coordinate Systems
//!
//! Scene space is 800×500 with y up. [`Viewport`] scales it to the
//! framebuffer, where y grows downward.

mod fill;
mod viewport;

pub use fill::{fill_polygon, fill_square};
pub use viewport::Viewport;

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Pixel, Point};
use crate::raster::BresenhamLine;
use crate::scene::{DisplayList, DrawCommand, Paint, Shape};

/// Background used when none is configured.
pub const DEFAULT_BACKGROUND: Rgba = Rgba::rgb(38, 31, 26);

/// Draws display lists into framebuffers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Renderer {
    background: Option<Rgba>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            background: Some(DEFAULT_BACKGROUND),
        }
    }
}

impl Renderer {
    /// Renderer that clears to [`DEFAULT_BACKGROUND`] first.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear to `color` before drawing.
    #[must_use]
    pub fn with_background(mut self, color: Rgba) -> Self {
        self.background = Some(color);
        self
    }

    /// Draw on top of the existing framebuffer contents.
    #[must_use]
    pub fn without_clear(mut self) -> Self {
        self.background = None;
        self
    }

    /// Render every command of `list` in order.
    pub fn render(&self, list: &DisplayList, fb: &mut Framebuffer) {
        if let Some(color) = self.background {
            fb.clear(color);
        }

        let viewport = Viewport::for_framebuffer(fb);
        for cmd in list {
            draw_command(fb, &viewport, cmd);
        }
        log::trace!(
            "rendered {} commands into {}x{}",
            list.len(),
            fb.width(),
            fb.height()
        );
    }
}

fn draw_command(fb: &mut Framebuffer, viewport: &Viewport, cmd: &DrawCommand) {
    let (sx, sy) = viewport.scale();
    match &cmd.shape {
        Shape::Pixels { pixels, size } => {
            let color = cmd.paint.at(0.0);
            for p in pixels {
                let center = viewport.to_device(Point::new(p.x as f32 + 0.5, p.y as f32 + 0.5));
                fill_square(fb, center, size * sx, size * sy, color);
            }
        }
        Shape::Polygon(points) => fill_shape(fb, viewport, points, cmd.paint),
        Shape::Fan { hub, rim } => {
            let mut points = Vec::with_capacity(rim.len() + 1);
            points.push(*hub);
            points.extend_from_slice(rim);
            fill_shape(fb, viewport, &points, cmd.paint);
        }
        Shape::Polyline { points, width } => {
            let color = cmd.paint.at(0.0);
            let stroke = (width * sx.min(sy)).max(1.0);
            let device: Vec<Pixel> = points
                .iter()
                .map(|p| {
                    let d = viewport.to_device(*p);
                    Pixel::new(d.x.floor() as i32, d.y.floor() as i32)
                })
                .collect();
            for segment in device.windows(2) {
                for px in BresenhamLine::new(segment[0], segment[1]) {
                    let center = Point::new(px.x as f32 + 0.5, px.y as f32 + 0.5);
                    fill_square(fb, center, stroke, stroke, color);
                }
            }
        }
    }
}

fn fill_shape(fb: &mut Framebuffer, viewport: &Viewport, points: &[Point], paint: Paint) {
    let device: Vec<Point> = points.iter().map(|p| viewport.to_device(*p)).collect();
    fill_polygon(fb, &device, |t| paint.at(t));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{AnimationState, Scene};

    fn render(list: &DisplayList, w: u32, h: u32) -> Framebuffer {
        let mut fb = Framebuffer::new(w, h).unwrap();
        Renderer::new().with_background(Rgba::WHITE).render(list, &mut fb);
        fb
    }

    #[test]
    fn test_pixels_map_to_flipped_rows() {
        let mut list = DisplayList::new();
        list.push(
            Shape::Pixels {
                pixels: vec![Pixel::new(0, 0), Pixel::new(799, 499)],
                size: 1.0,
            },
            Rgba::RED,
        );
        let fb = render(&list, 800, 500);
        assert_eq!(fb.get_pixel(0, 499), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(799, 0), Some(Rgba::RED));
        assert_eq!(fb.count_color(Rgba::RED), 2);
    }

    #[test]
    fn test_point_size_scales() {
        let mut list = DisplayList::new();
        list.push(
            Shape::Pixels {
                pixels: vec![Pixel::new(100, 100)],
                size: 2.0,
            },
            Rgba::BLUE,
        );
        assert_eq!(render(&list, 800, 500).count_color(Rgba::BLUE), 4);
        assert_eq!(render(&list, 1600, 1000).count_color(Rgba::BLUE), 16);
    }

    #[test]
    fn test_polygon_fill_area() {
        let mut list = DisplayList::new();
        list.push(
            Shape::Polygon(vec![
                Point::new(10.0, 10.0),
                Point::new(30.0, 10.0),
                Point::new(30.0, 20.0),
                Point::new(10.0, 20.0),
            ]),
            Rgba::GREEN,
        );
        assert_eq!(render(&list, 800, 500).count_color(Rgba::GREEN), 200);
    }

    #[test]
    fn test_fan_fills_circle() {
        let mut list = DisplayList::new();
        let fan = crate::raster::CircleFan::new(Point::new(400.0, 250.0), 20.0, 64).unwrap();
        list.push(
            Shape::Fan {
                hub: fan.center(),
                rim: fan.rim().collect(),
            },
            Rgba::RED,
        );
        let area = render(&list, 800, 500).count_color(Rgba::RED) as f32;
        let expected = std::f32::consts::PI * 400.0;
        assert!((area - expected).abs() / expected < 0.03, "area {area}");
    }

    #[test]
    fn test_polyline_connects_points() {
        let mut list = DisplayList::new();
        list.push(
            Shape::Polyline {
                points: vec![Point::new(10.0, 10.0), Point::new(20.0, 10.0)],
                width: 1.0,
            },
            Rgba::BLACK,
        );
        let fb = render(&list, 800, 500);
        assert_eq!(fb.count_color(Rgba::BLACK), 11);
        assert_eq!(fb.get_pixel(15, 490), Some(Rgba::BLACK));
    }

    #[test]
    fn test_without_clear_keeps_contents() {
        let mut fb = Framebuffer::new(8, 5).unwrap();
        fb.clear(Rgba::BLUE);
        Renderer::new()
            .without_clear()
            .render(&DisplayList::new(), &mut fb);
        assert_eq!(fb.count_color(Rgba::BLUE), 40);
    }

    #[test]
    fn test_full_scene_covers_frame() {
        let list = Scene::default().compose(&AnimationState::new()).unwrap();
        let mut fb = Framebuffer::new(400, 250).unwrap();
        Renderer::new().render(&list, &mut fb);
        // Walls and floor cover every pixel
        assert_eq!(fb.count_color(DEFAULT_BACKGROUND), 0);
    }
}
