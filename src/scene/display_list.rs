//! Drawable primitives returned by scene composition.
//!
//! Drawing routines build a [`DisplayList`] instead of touching a surface,
//! so a frame can be inspected, transformed or handed to any backend.

use crate::color::Rgba;
use crate::geometry::{Pixel, Point};
use crate::transform::Transform;

/// How a shape is colored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    /// Single color.
    Solid(Rgba),
    /// Linear blend from the shape's lowest to its highest scene y.
    VerticalGradient {
        /// Color at the bottom edge.
        bottom: Rgba,
        /// Color at the top edge.
        top: Rgba,
    },
}

impl Paint {
    /// Color at fraction `t` of the shape's height (0 = bottom).
    #[must_use]
    pub fn at(&self, t: f32) -> Rgba {
        match *self {
            Self::Solid(color) => color,
            Self::VerticalGradient { bottom, top } => bottom.lerp(top, t),
        }
    }
}

impl From<Rgba> for Paint {
    fn from(color: Rgba) -> Self {
        Self::Solid(color)
    }
}

/// Geometry of a draw command, in scene coordinates (y up).
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Rasterized pixel positions, each drawn as a `size`-wide square.
    Pixels {
        /// Positions emitted by a generator.
        pixels: Vec<Pixel>,
        /// Point size in scene units.
        size: f32,
    },
    /// Filled polygon (even-odd rule).
    Polygon(Vec<Point>),
    /// Filled triangle fan.
    Fan {
        /// Shared vertex of every triangle.
        hub: Point,
        /// Rim vertices in order.
        rim: Vec<Point>,
    },
    /// Open connected line strip.
    Polyline {
        /// Vertices in order.
        points: Vec<Point>,
        /// Stroke width in scene units.
        width: f32,
    },
}

impl Shape {
    /// Map every vertex through `transform`.
    ///
    /// Pixel positions are transformed as points and re-rounded. Point
    /// sizes and stroke widths grow with the transform's scale, so a
    /// scaled line keeps its stamps touching.
    #[must_use]
    pub fn transformed(&self, transform: &Transform) -> Self {
        if transform.is_identity() {
            return self.clone();
        }
        let map = |pts: &[Point]| -> Vec<Point> { pts.iter().map(|p| transform.apply(*p)).collect() };
        let factor = transform.scale_factor();
        // Rotations leave the factor a rounding error away from 1
        let resize = |len: f32| if (factor - 1.0).abs() < 1e-4 { len } else { len * factor };

        match self {
            Self::Pixels { pixels, size } => Self::Pixels {
                pixels: pixels
                    .iter()
                    .map(|p| transform.apply(p.to_point()).round())
                    .collect(),
                size: resize(*size),
            },
            Self::Polygon(points) => Self::Polygon(map(points)),
            Self::Fan { hub, rim } => Self::Fan {
                hub: transform.apply(*hub),
                rim: map(rim),
            },
            Self::Polyline { points, width } => Self::Polyline {
                points: map(points),
                width: resize(*width),
            },
        }
    }

    /// Number of vertices or pixels carried by the shape.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        match self {
            Self::Pixels { pixels, .. } => pixels.len(),
            Self::Polygon(points) | Self::Polyline { points, .. } => points.len(),
            Self::Fan { rim, .. } => rim.len() + 1,
        }
    }
}

/// One shape plus its paint.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    /// What to draw.
    pub shape: Shape,
    /// How to color it.
    pub paint: Paint,
}

/// Ordered back-to-front list of draw commands for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    /// Create an empty display list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command.
    pub fn push(&mut self, shape: Shape, paint: impl Into<Paint>) {
        self.commands.push(DrawCommand {
            shape,
            paint: paint.into(),
        });
    }

    /// Append every command of `other`.
    pub fn append(&mut self, other: &mut Self) {
        self.commands.append(&mut other.commands);
    }

    /// Commands in draw order.
    pub fn iter(&self) -> std::slice::Iter<'_, DrawCommand> {
        self.commands.iter()
    }

    /// Number of commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the list has no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All pixel positions carried by pixel commands.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> + '_ {
        self.commands.iter().flat_map(|cmd| {
            let pixels: &[Pixel] = match &cmd.shape {
                Shape::Pixels { pixels, .. } => pixels,
                _ => &[],
            };
            pixels.iter().copied()
        })
    }
}

impl<'a> IntoIterator for &'a DisplayList {
    type Item = &'a DrawCommand;
    type IntoIter = std::slice::Iter<'a, DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
