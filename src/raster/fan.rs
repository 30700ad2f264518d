//! Triangle-fan approximations of filled circles and elliptical domes.
//!
//! Unlike the midpoint outline these sample the boundary at equal angles
//! and are meant for area filling: the hub plus consecutive rim vertices
//! form the fan's triangles.

use std::f32::consts::TAU;

use crate::error::{Error, Result};
use crate::geometry::Point;

/// Smallest segment count that still encloses an area.
pub const MIN_SEGMENTS: u32 = 3;

/// Filled-circle fan with `segments` equally spaced rim samples.
///
/// The rim has `segments + 1` vertices at angles `2π·i / segments`; the
/// last one coincides with the first and closes the fan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleFan {
    center: Point,
    radius: f32,
    segments: u32,
}

impl CircleFan {
    /// Create a validated circle fan.
    ///
    /// # Errors
    ///
    /// Returns an error if the center or radius is non-finite, the radius
    /// is negative, or fewer than [`MIN_SEGMENTS`] segments are requested.
    pub fn new(center: Point, radius: f32, segments: u32) -> Result<Self> {
        let center = center.ensure_finite("circle fan center")?;
        if !radius.is_finite() {
            return Err(Error::NonFiniteCoordinate {
                context: "circle fan radius",
                x: radius,
                y: radius,
            });
        }
        if radius < 0.0 {
            return Err(Error::NegativeRadius(radius));
        }
        if segments < MIN_SEGMENTS {
            return Err(Error::InvalidSegments {
                segments,
                min: MIN_SEGMENTS,
            });
        }

        Ok(Self {
            center,
            radius,
            segments,
        })
    }

    /// Fan hub.
    #[must_use]
    pub const fn center(&self) -> Point {
        self.center
    }

    /// Radius of the sampled circle.
    #[must_use]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// Number of angular segments.
    #[must_use]
    pub const fn segments(&self) -> u32 {
        self.segments
    }

    /// Rim vertices, first vertex repeated at the end.
    pub fn rim(&self) -> impl Iterator<Item = Point> + Clone + '_ {
        let n = self.segments;
        (0..=n).map(move |i| {
            let angle = TAU * i as f32 / n as f32;
            Point::new(
                self.center.x + self.radius * angle.cos(),
                self.center.y + self.radius * angle.sin(),
            )
        })
    }

    /// Hub followed by the rim, in triangle-fan order.
    pub fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        std::iter::once(self.center).chain(self.rim())
    }
}

/// Elliptical arc fan, used for domed shapes such as a lamp shade top.
///
/// Samples `(cx + rx·cos θ, cy + ry·sin θ)` for θ from `start_deg` to
/// `end_deg` inclusive in steps of `step_deg` degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcFan {
    center: Point,
    rx: f32,
    ry: f32,
    start_deg: u32,
    end_deg: u32,
    step_deg: u32,
}

impl ArcFan {
    /// Create an arc fan.
    ///
    /// # Errors
    ///
    /// Returns an error if a radius is negative or non-finite, the step is
    /// zero, or the range yields fewer than two rim vertices.
    pub fn new(
        center: Point,
        (rx, ry): (f32, f32),
        (start_deg, end_deg): (u32, u32),
        step_deg: u32,
    ) -> Result<Self> {
        let center = center.ensure_finite("arc fan center")?;
        Point::new(rx, ry).ensure_finite("arc fan radii")?;
        if rx < 0.0 || ry < 0.0 {
            return Err(Error::NegativeRadius(rx.min(ry)));
        }
        if step_deg == 0 || end_deg <= start_deg {
            return Err(Error::InvalidSegments {
                segments: end_deg.saturating_sub(start_deg).checked_div(step_deg).unwrap_or(0),
                min: 1,
            });
        }

        Ok(Self {
            center,
            rx,
            ry,
            start_deg,
            end_deg,
            step_deg,
        })
    }

    /// Fan hub.
    #[must_use]
    pub const fn center(&self) -> Point {
        self.center
    }

    /// Rim vertices along the arc.
    pub fn rim(&self) -> impl Iterator<Item = Point> + Clone + '_ {
        (self.start_deg..=self.end_deg)
            .step_by(self.step_deg as usize)
            .map(move |deg| {
                let angle = (deg as f32).to_radians();
                Point::new(
                    self.center.x + self.rx * angle.cos(),
                    self.center.y + self.ry * angle.sin(),
                )
            })
    }
}
