//! Recording surface used by the furniture routines.

use crate::color::Rgba;
use crate::error::Result;
use crate::geometry::{Pixel, Point, Rect};
use crate::raster::{ArcFan, BresenhamLine, CircleFan, DdaLine, MidpointCircle};
use crate::transform::Transform;

use super::display_list::{DisplayList, Paint, Shape};

/// Point size used for algorithm-drawn lines and outlines.
pub const POINT_SIZE: f32 = 2.0;

/// Records shapes into a [`DisplayList`] under a current transform.
///
/// Shapes are mapped through the transform as they are recorded, so the
/// resulting list is in plain scene coordinates.
#[derive(Debug, Default)]
pub struct Canvas {
    list: DisplayList,
    transform: Transform,
}

impl Canvas {
    /// Create an empty canvas with the identity transform.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Run `draw` with `local` applied before the current transform.
    ///
    /// The previous transform is restored afterwards, even on error.
    ///
    /// # Errors
    ///
    /// Propagates the error returned by `draw`.
    pub fn with_transform<F>(&mut self, local: Transform, draw: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let saved = self.transform;
        self.transform = local.then(saved);
        let result = draw(self);
        self.transform = saved;
        result
    }

    /// Finish recording and return the list.
    #[must_use]
    pub fn finish(self) -> DisplayList {
        self.list
    }

    fn push(&mut self, shape: Shape, paint: impl Into<Paint>) {
        self.list.push(shape.transformed(&self.transform), paint);
    }

    /// Axis-aligned rectangle anchored at its lower-left corner.
    pub fn rect(&mut self, x: f32, y: f32, width: f32, height: f32, paint: impl Into<Paint>) {
        let corners = Rect::new(x, y, width, height).corners();
        self.push(Shape::Polygon(corners.to_vec()), paint);
    }

    /// Filled polygon.
    pub fn polygon(&mut self, points: Vec<Point>, paint: impl Into<Paint>) {
        self.push(Shape::Polygon(points), paint);
    }

    /// Filled circle approximated by a triangle fan.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid fan parameters.
    pub fn circle(&mut self, center: Point, radius: f32, segments: u32, color: Rgba) -> Result<()> {
        let fan = CircleFan::new(center, radius, segments)?;
        self.push(
            Shape::Fan {
                hub: fan.center(),
                rim: fan.rim().collect(),
            },
            color,
        );
        Ok(())
    }

    /// Upper half ellipse, sampled every 10 degrees.
    ///
    /// # Errors
    ///
    /// Returns an error for negative or non-finite radii.
    pub fn dome(&mut self, center: Point, radii: (f32, f32), color: Rgba) -> Result<()> {
        let fan = ArcFan::new(center, radii, (0, 180), 10)?;
        self.push(
            Shape::Fan {
                hub: fan.center(),
                rim: fan.rim().collect(),
            },
            color,
        );
        Ok(())
    }

    /// Line rasterized with the DDA generator.
    ///
    /// # Errors
    ///
    /// Returns an error if an endpoint is not finite.
    pub fn dda(&mut self, from: Point, to: Point, size: f32, color: Rgba) -> Result<()> {
        let pixels = DdaLine::try_new(from, to)?.collect();
        self.push(Shape::Pixels { pixels, size }, color);
        Ok(())
    }

    /// Line rasterized with the Bresenham generator.
    pub fn bresenham(&mut self, from: Pixel, to: Pixel, size: f32, color: Rgba) {
        let pixels = BresenhamLine::new(from, to).collect();
        self.push(Shape::Pixels { pixels, size }, color);
    }

    /// Circle outline rasterized with the midpoint generator.
    pub fn midpoint_circle(&mut self, center: Pixel, radius: u32, size: f32, color: Rgba) {
        let pixels = MidpointCircle::new(center, radius).collect();
        self.push(Shape::Pixels { pixels, size }, color);
    }

    /// Open line strip of the given stroke width.
    pub fn polyline(&mut self, points: Vec<Point>, width: f32, color: Rgba) {
        self.push(Shape::Polyline { points, width }, color);
    }

    /// Single stroked segment.
    pub fn line(&mut self, from: Point, to: Point, width: f32, color: Rgba) {
        self.polyline(vec![from, to], width, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_rect_records_polygon() {
        let mut canvas = Canvas::new();
        canvas.rect(1.0, 2.0, 3.0, 4.0, Rgba::RED);
        let list = canvas.finish();
        let cmd = list.iter().next().unwrap();
        assert_eq!(cmd.shape.vertex_count(), 4);
        assert_eq!(cmd.paint, Paint::Solid(Rgba::RED));
    }

    #[test]
    fn test_transform_is_scoped() {
        let mut canvas = Canvas::new();
        canvas
            .with_transform(Transform::translate(10.0, 0.0), |c| {
                c.bresenham(Pixel::new(0, 0), Pixel::new(2, 0), 1.0, Rgba::BLACK);
                Ok(())
            })
            .unwrap();
        assert!(canvas.transform().is_identity());

        canvas.bresenham(Pixel::new(0, 0), Pixel::new(0, 0), 1.0, Rgba::BLACK);
        let pixels: Vec<Pixel> = canvas.finish().pixels().collect();
        assert_eq!(
            pixels,
            vec![
                Pixel::new(10, 0),
                Pixel::new(11, 0),
                Pixel::new(12, 0),
                Pixel::new(0, 0)
            ]
        );
    }

    #[test]
    fn test_nested_transforms_apply_inner_first() {
        let mut canvas = Canvas::new();
        canvas
            .with_transform(Transform::translate(100.0, 0.0), |c| {
                c.with_transform(Transform::rotate(90.0), |c| {
                    c.line(Point::ORIGIN, Point::new(10.0, 0.0), 1.0, Rgba::BLACK);
                    Ok(())
                })
            })
            .unwrap();
        let list = canvas.finish();
        let Some(Shape::Polyline { points, .. }) = list.iter().next().map(|c| &c.shape) else {
            panic!("expected polyline");
        };
        assert_abs_diff_eq!(points[1].x, 100.0, epsilon = 1e-4);
        assert_abs_diff_eq!(points[1].y, 10.0, epsilon = 1e-4);
    }

    #[test]
    fn test_transform_restored_on_error() {
        let mut canvas = Canvas::new();
        let result = canvas.with_transform(Transform::scale(2.0, 2.0), |c| {
            c.circle(Point::ORIGIN, 1.0, 2, Rgba::BLACK)
        });
        assert!(result.is_err());
        assert!(canvas.transform().is_identity());
    }

    #[test]
    fn test_dome_has_nineteen_rim_points() {
        let mut canvas = Canvas::new();
        canvas
            .dome(Point::new(400.0, 430.0), (40.0, 15.0), Rgba::RED)
            .unwrap();
        let list = canvas.finish();
        assert_eq!(list.iter().next().unwrap().shape.vertex_count(), 20);
    }
}
