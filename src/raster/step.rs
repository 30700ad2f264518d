//! Step and sign helpers shared by the line generators.

use crate::geometry::Pixel;

/// Direction to move along one axis to get from `from` to `to`.
///
/// Returns `+1` when `from < to` and `-1` otherwise, including when the
/// two are equal (the axis then never advances, so the sign is moot).
#[inline]
#[must_use]
pub const fn step_sign(from: i32, to: i32) -> i32 {
    if from < to {
        1
    } else {
        -1
    }
}

/// Number of unit steps along the major axis between two pixels.
///
/// Computed without overflow for any pair of `i32` coordinates.
#[inline]
#[must_use]
pub const fn major_steps(from: Pixel, to: Pixel) -> u32 {
    let ax = from.x.abs_diff(to.x);
    let ay = from.y.abs_diff(to.y);
    if ax > ay {
        ax
    } else {
        ay
    }
}

/// Real-valued extent along the major axis: `max(|dx|, |dy|)`.
#[inline]
#[must_use]
pub fn major_extent(dx: f64, dy: f64) -> f64 {
    dx.abs().max(dy.abs())
}
