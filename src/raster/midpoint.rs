//! Midpoint circle generator.
//!
//! Walks one octant with an integer decision term and mirrors every offset
//! into all eight octants.

use std::iter::FusedIterator;

use crate::error::{Error, Result};
use crate::geometry::Pixel;

/// Lazy sequence of outline pixels of a circle.
///
/// Each `(x, y)` offset of the walked octant yields eight candidates,
/// `(cx±x, cy±y)` then `(cx±y, cy±x)`. Candidates that coincide on the
/// octant boundaries (`x == 0`, `x == y`) are all emitted; use
/// [`dedup_pixels`](super::dedup_pixels) for a set. A zero radius emits the
/// center eight times.
///
/// Every emitted pixel lies within half a pixel of the ideal circle.
///
/// ```
/// use office_raster::geometry::Pixel;
/// use office_raster::raster::MidpointCircle;
///
/// let outline: Vec<_> = MidpointCircle::new(Pixel::new(0, 0), 5).collect();
/// assert!(outline.contains(&Pixel::new(5, 0)));
/// assert!(outline.contains(&Pixel::new(0, -5)));
/// ```
#[derive(Debug, Clone)]
pub struct MidpointCircle {
    cx: i64,
    cy: i64,
    x: i64,
    y: i64,
    d: i64,
    /// Next of the eight symmetric candidates to emit for `(x, y)`.
    octant: u8,
}

impl MidpointCircle {
    /// Start a new outline walk around `center`.
    #[must_use]
    pub fn new(center: Pixel, radius: u32) -> Self {
        let r = i64::from(radius);
        Self {
            cx: i64::from(center.x),
            cy: i64::from(center.y),
            x: 0,
            y: r,
            d: 1 - r,
            octant: 0,
        }
    }

    /// Start a new outline walk from a signed radius.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeRadius`] if `radius < 0`.
    pub fn try_new(center: Pixel, radius: i32) -> Result<Self> {
        let radius = u32::try_from(radius).map_err(|_| Error::NegativeRadius(radius as f32))?;
        Ok(Self::new(center, radius))
    }

    fn candidate(&self) -> Pixel {
        let (x, y) = (self.x, self.y);
        let (ox, oy) = match self.octant {
            0 => (x, y),
            1 => (-x, y),
            2 => (x, -y),
            3 => (-x, -y),
            4 => (y, x),
            5 => (-y, x),
            6 => (y, -x),
            _ => (-y, -x),
        };
        Pixel::new(saturate(self.cx + ox), saturate(self.cy + oy))
    }

    fn advance(&mut self) {
        if self.d < 0 {
            self.d += 2 * self.x + 3;
        } else {
            self.d += 2 * (self.x - self.y) + 5;
            self.y -= 1;
        }
        self.x += 1;
    }
}

fn saturate(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

impl Iterator for MidpointCircle {
    type Item = Pixel;

    fn next(&mut self) -> Option<Pixel> {
        if self.x > self.y {
            return None;
        }

        let pixel = self.candidate();
        self.octant += 1;
        if self.octant == 8 {
            self.octant = 0;
            self.advance();
        }
        Some(pixel)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.x > self.y {
            (0, Some(0))
        } else {
            (usize::from(8 - self.octant), None)
        }
    }
}

impl FusedIterator for MidpointCircle {}
