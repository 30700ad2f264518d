//! DDA (Digital Differential Analyzer) line generator.
//!
//! Walks the segment in equal real-valued increments along both axes and
//! rounds each running position to the nearest pixel when it is emitted.

use std::iter::FusedIterator;

use super::step::major_extent;
use crate::error::Result;
use crate::geometry::{Pixel, Point};

/// Lazy sequence of pixels approximating the segment `start..=end`.
///
/// The walk takes `n = ceil(max(|dx|, |dy|))` steps of `(dx / n, dy / n)`
/// and emits `n + 1` positions, so both endpoints are included and no
/// increment exceeds one pixel. A zero-length segment emits its single
/// point.
///
/// Endpoints must be finite; [`DdaLine::try_new`] checks this, [`DdaLine::new`]
/// assumes it. Any pair of finite `f32` endpoints gives finite increments.
/// Extents longer than `u64::MAX` steps are clamped to that many steps and
/// do not reach the end point.
///
/// ```
/// use office_raster::geometry::{Pixel, Point};
/// use office_raster::raster::DdaLine;
///
/// let line = DdaLine::new(Point::new(0.0, 0.0), Point::new(3.0, 1.5));
/// assert_eq!(line.len(), 4);
/// assert_eq!(line.last(), Some(Pixel::new(3, 2)));
/// ```
#[derive(Debug, Clone)]
pub struct DdaLine {
    x: f64,
    y: f64,
    x_inc: f64,
    y_inc: f64,
    remaining: u64,
}

impl DdaLine {
    /// Start a new DDA walk from `start` to `end`.
    #[must_use]
    pub fn new(start: Point, end: Point) -> Self {
        let (x, y) = (f64::from(start.x), f64::from(start.y));
        // f32 differences overflow for endpoints near the type's limits
        let dx = f64::from(end.x) - x;
        let dy = f64::from(end.y) - y;
        let steps = major_extent(dx, dy).ceil() as u64;
        let divisor = steps.max(1) as f64;

        Self {
            x,
            y,
            x_inc: dx / divisor,
            y_inc: dy / divisor,
            remaining: steps.saturating_add(1),
        }
    }

    /// Start a new DDA walk, rejecting non-finite endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NonFiniteCoordinate`] if either endpoint has
    /// a NaN or infinite component.
    pub fn try_new(start: Point, end: Point) -> Result<Self> {
        let start = start.ensure_finite("DDA line start")?;
        let end = end.ensure_finite("DDA line end")?;
        Ok(Self::new(start, end))
    }

    /// Convenience constructor from raw coordinates.
    #[must_use]
    pub fn from_coords(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    /// Yield the running positions without rounding.
    #[must_use]
    pub fn subpixel(self) -> DdaSubpixel {
        DdaSubpixel { inner: self }
    }

    fn step(&mut self) -> Option<(f64, f64)> {
        if self.remaining == 0 {
            return None;
        }

        let current = (self.x, self.y);
        self.remaining -= 1;
        self.x += self.x_inc;
        self.y += self.y_inc;
        Some(current)
    }

    fn hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.remaining).ok();
        (n.unwrap_or(usize::MAX), n)
    }
}

impl Iterator for DdaLine {
    type Item = Pixel;

    fn next(&mut self) -> Option<Pixel> {
        self.step()
            .map(|(x, y)| Pixel::new(x.round() as i32, y.round() as i32))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.hint()
    }
}

impl ExactSizeIterator for DdaLine {}

impl FusedIterator for DdaLine {}

/// Unrounded DDA positions, for consumers that plot with coverage.
#[derive(Debug, Clone)]
pub struct DdaSubpixel {
    inner: DdaLine,
}

impl Iterator for DdaSubpixel {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        self.inner
            .step()
            .map(|(x, y)| Point::new(x as f32, y as f32))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.hint()
    }
}

impl ExactSizeIterator for DdaSubpixel {}

impl FusedIterator for DdaSubpixel {}
