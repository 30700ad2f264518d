//! Geometric primitives for rasterization.
//!
//! [`Pixel`] is an addressable integer position; [`Point`] carries
//! sub-pixel precision for DDA endpoints, fan vertices and polygons.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::raster::{BresenhamLine, DdaLine, MidpointCircle};

/// An integer pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Pixel {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Pixel {
    /// Create a new pixel position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this pixel by `(dx, dy)`.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Squared Euclidean distance to another pixel.
    #[must_use]
    pub const fn distance_squared(self, other: Self) -> i64 {
        let dx = self.x as i64 - other.x as i64;
        let dy = self.y as i64 - other.y as i64;
        dx * dx + dy * dy
    }

    /// Convert to a sub-pixel point at the same position.
    #[must_use]
    pub fn to_point(self) -> Point {
        Point::new(self.x as f32, self.y as f32)
    }
}

impl From<(i32, i32)> for Pixel {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A 2D point with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Calculate the distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Linear interpolation between two points.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    /// Round to the nearest pixel center.
    #[must_use]
    pub fn round(self) -> Pixel {
        Pixel::new(self.x.round() as i32, self.y.round() as i32)
    }

    /// Whether both components are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Return `self` if both components are finite.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteCoordinate`] naming `context` otherwise.
    pub fn ensure_finite(self, context: &'static str) -> Result<Self> {
        if self.is_finite() {
            Ok(self)
        } else {
            Err(Error::NonFiniteCoordinate {
                context,
                x: self.x,
                y: self.y,
            })
        }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// A straight segment between two endpoints.
///
/// Unordered for rasterization purposes: both generators produce the same
/// pixel set for either orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LineSegment<T> {
    /// Start point.
    pub start: T,
    /// End point.
    pub end: T,
}

impl<T: Copy> LineSegment<T> {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: T, end: T) -> Self {
        Self { start, end }
    }

    /// The same segment walked the other way.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self::new(self.end, self.start)
    }
}

impl LineSegment<Point> {
    /// Euclidean length.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    /// Pixels along the segment via DDA.
    #[must_use]
    pub fn dda(&self) -> DdaLine {
        DdaLine::new(self.start, self.end)
    }
}

impl LineSegment<Pixel> {
    /// Pixels along the segment via Bresenham.
    #[must_use]
    pub fn bresenham(&self) -> BresenhamLine {
        BresenhamLine::new(self.start, self.end)
    }
}

/// A circle with integer center and non-negative radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Circle {
    /// Center pixel.
    pub center: Pixel,
    /// Radius in pixels.
    pub radius: u32,
}

impl Circle {
    /// Create a new circle.
    #[must_use]
    pub const fn new(center: Pixel, radius: u32) -> Self {
        Self { center, radius }
    }

    /// Outline pixels via the midpoint algorithm, duplicates included.
    #[must_use]
    pub fn outline(&self) -> MidpointCircle {
        MidpointCircle::new(self.center, self.radius)
    }
}

/// An axis-aligned rectangle anchored at its lower-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// X coordinate of the anchor corner.
    pub x: f32,
    /// Y coordinate of the anchor corner.
    pub y: f32,
    /// Width of the rectangle.
    pub width: f32,
    /// Height of the rectangle.
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Corners in counter-clockwise order starting at the anchor.
    #[must_use]
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.x, self.y),
            Point::new(self.x + self.width, self.y),
            Point::new(self.x + self.width, self.y + self.height),
            Point::new(self.x, self.y + self.height),
        ]
    }
}
