//! 2D affine transforms for scene shapes.
//!
//! Rotations are in degrees, counter-clockwise in a y-up frame.

use crate::geometry::Point;

/// Affine transform `[a c e; b d f]` mapping `(x, y)` to
/// `(a·x + c·y + e, b·x + d·y + f)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    e: f32,
    f: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    /// Translation by `(tx, ty)`.
    #[must_use]
    pub const fn translate(tx: f32, ty: f32) -> Self {
        Self {
            e: tx,
            f: ty,
            ..Self::IDENTITY
        }
    }

    /// Rotation about the origin.
    #[must_use]
    pub fn rotate(degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Uniform or non-uniform scale about the origin.
    #[must_use]
    pub const fn scale(sx: f32, sy: f32) -> Self {
        Self {
            a: sx,
            d: sy,
            ..Self::IDENTITY
        }
    }

    /// Rotation about `pivot`.
    #[must_use]
    pub fn rotate_about(pivot: Point, degrees: f32) -> Self {
        Self::translate(-pivot.x, -pivot.y)
            .then(Self::rotate(degrees))
            .then(Self::translate(pivot.x, pivot.y))
    }

    /// Scale about `pivot`.
    #[must_use]
    pub fn scale_about(pivot: Point, sx: f32, sy: f32) -> Self {
        Self::translate(-pivot.x, -pivot.y)
            .then(Self::scale(sx, sy))
            .then(Self::translate(pivot.x, pivot.y))
    }

    /// Apply `self` first, then `next`.
    #[must_use]
    pub fn then(self, next: Self) -> Self {
        Self {
            a: next.a * self.a + next.c * self.b,
            b: next.b * self.a + next.d * self.b,
            c: next.a * self.c + next.c * self.d,
            d: next.b * self.c + next.d * self.d,
            e: next.a * self.e + next.c * self.f + next.e,
            f: next.b * self.e + next.d * self.f + next.f,
        }
    }

    /// Transform a point.
    #[must_use]
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    /// Average linear scale, `sqrt(|det|)`: 1 for rigid motions, `s` for a
    /// uniform scale by `s`.
    #[must_use]
    pub fn scale_factor(&self) -> f32 {
        (self.a * self.d - self.b * self.c).abs().sqrt()
    }

    /// Whether this is exactly the identity.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_point(p: Point, x: f32, y: f32) {
        assert_abs_diff_eq!(p.x, x, epsilon = 1e-4);
        assert_abs_diff_eq!(p.y, y, epsilon = 1e-4);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        assert_point(Transform::rotate(90.0).apply(Point::new(1.0, 0.0)), 0.0, 1.0);
    }

    #[test]
    fn test_rotate_about_pivot_keeps_pivot() {
        let pivot = Point::new(400.0, 480.0);
        let t = Transform::rotate_about(pivot, 8.0);
        assert_point(t.apply(pivot), 400.0, 480.0);
        // A point straight below the pivot swings towards +x for a CCW turn
        let swung = t.apply(Point::new(400.0, 430.0));
        assert!(swung.x > 400.0);
    }

    #[test]
    fn test_then_order() {
        // translate then scale differs from scale then translate
        let t1 = Transform::translate(1.0, 0.0).then(Transform::scale(2.0, 2.0));
        let t2 = Transform::scale(2.0, 2.0).then(Transform::translate(1.0, 0.0));
        assert_point(t1.apply(Point::ORIGIN), 2.0, 0.0);
        assert_point(t2.apply(Point::ORIGIN), 1.0, 0.0);
    }

    #[test]
    fn test_scale_about() {
        let t = Transform::scale_about(Point::new(10.0, 10.0), 2.0, 2.0);
        assert_point(t.apply(Point::new(11.0, 10.0)), 12.0, 10.0);
    }

    #[test]
    fn test_scale_factor() {
        assert_abs_diff_eq!(Transform::IDENTITY.scale_factor(), 1.0);
        assert_abs_diff_eq!(Transform::rotate(37.0).scale_factor(), 1.0, epsilon = 1e-5);
        let placed = Transform::scale_about(Point::new(400.0, 37.0), 3.0, 3.0)
            .then(Transform::translate(600.0, 0.0));
        assert_abs_diff_eq!(placed.scale_factor(), 3.0, epsilon = 1e-5);
    }

    #[test]
    fn test_identity() {
        assert!(Transform::default().is_identity());
        assert!(!Transform::translate(1.0, 0.0).is_identity());
    }
}
