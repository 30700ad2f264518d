//! Scanline fill in device space.
//!
//! Pixels are covered when their center lies inside the shape. Polygon
//! edges use a half-open rule on y, so shared edges are filled once and
//! horizontal edges contribute nothing.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;

/// First and last pixel index whose center lies in `[lo, hi)`.
fn covered(lo: f32, hi: f32) -> (i32, i32) {
    let first = (lo - 0.5).ceil() as i32;
    let last = (hi - 0.5).ceil() as i32 - 1;
    (first, last)
}

/// Fill a polygon given in device coordinates with the even-odd rule.
///
/// `shade` receives the fraction of the polygon's height at each row,
/// 0 at the bottom (largest device y) and 1 at the top.
pub fn fill_polygon<F>(fb: &mut Framebuffer, points: &[Point], shade: F)
where
    F: Fn(f32) -> Rgba,
{
    if points.len() < 3 {
        return;
    }

    let (min_y, max_y) = points
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.y), hi.max(p.y))
        });
    if !min_y.is_finite() || !max_y.is_finite() {
        return;
    }

    let (first_row, last_row) = covered(min_y, max_y);
    let first_row = first_row.max(0);
    let last_row = last_row.min(fb.height() as i32 - 1);
    let span = max_y - min_y;

    let mut crossings: Vec<f32> = Vec::with_capacity(points.len());
    for row in first_row..=last_row {
        let yc = row as f32 + 0.5;
        crossings.clear();

        for (i, a) in points.iter().enumerate() {
            let b = &points[(i + 1) % points.len()];
            if (a.y <= yc) != (b.y <= yc) {
                let t = (yc - a.y) / (b.y - a.y);
                crossings.push(a.x + t * (b.x - a.x));
            }
        }
        crossings.sort_by(f32::total_cmp);

        let t = if span > 0.0 { (max_y - yc) / span } else { 0.0 };
        let color = shade(t.clamp(0.0, 1.0));
        for pair in crossings.chunks_exact(2) {
            let (x0, x1) = covered(pair[0], pair[1]);
            fb.fill_span(row, x0, x1, color);
        }
    }
}

/// Fill an axis-aligned device rectangle centered at `center`.
///
/// At least one pixel is covered in each direction, so sub-pixel points
/// stay visible on small outputs.
pub fn fill_square(fb: &mut Framebuffer, center: Point, width: f32, height: f32, color: Rgba) {
    let (mut x0, mut x1) = covered(center.x - width / 2.0, center.x + width / 2.0);
    let (mut y0, mut y1) = covered(center.y - height / 2.0, center.y + height / 2.0);
    if x1 < x0 {
        x0 = center.x.floor() as i32;
        x1 = x0;
    }
    if y1 < y0 {
        y0 = center.y.floor() as i32;
        y1 = y0;
    }
    for row in y0..=y1 {
        fb.fill_span(row, x0, x1, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank(w: u32, h: u32) -> Framebuffer {
        let mut fb = Framebuffer::new(w, h).unwrap();
        fb.clear(Rgba::WHITE);
        fb
    }

    #[test]
    fn test_covered_pixel_centers() {
        assert_eq!(covered(0.0, 4.0), (0, 3));
        assert_eq!(covered(0.6, 1.4), (1, 0));
        assert_eq!(covered(0.4, 1.6), (0, 1));
    }

    #[test]
    fn test_axis_aligned_square_fill() {
        let mut fb = blank(10, 10);
        let square = [
            Point::new(2.0, 2.0),
            Point::new(6.0, 2.0),
            Point::new(6.0, 6.0),
            Point::new(2.0, 6.0),
        ];
        fill_polygon(&mut fb, &square, |_| Rgba::RED);
        assert_eq!(fb.count_color(Rgba::RED), 16);
        assert_eq!(fb.get_pixel(2, 2), Some(Rgba::RED));
        assert_eq!(fb.get_pixel(6, 6), Some(Rgba::WHITE));
    }

    #[test]
    fn test_adjacent_polygons_do_not_overlap() {
        let mut fb = Framebuffer::new(10, 10).unwrap();
        let left = [
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(5.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        let right = [
            Point::new(5.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(5.0, 10.0),
        ];
        let half = Rgba::new(0, 0, 255, 128);
        fill_polygon(&mut fb, &left, |_| half);
        fill_polygon(&mut fb, &right, |_| half);
        // Each pixel blended exactly once
        assert_eq!(fb.count_color(fb.get_pixel(0, 0).unwrap()), 100);
    }

    #[test]
    fn test_even_odd_closing_fan() {
        // Triangle fan around a hub whose first and last rim points coincide
        let hub = Point::new(5.0, 5.0);
        let poly = [
            hub,
            Point::new(9.0, 5.0),
            Point::new(5.0, 9.0),
            Point::new(1.0, 5.0),
            Point::new(5.0, 1.0),
            Point::new(9.0, 5.0),
        ];
        let mut fb = blank(10, 10);
        fill_polygon(&mut fb, &poly, |_| Rgba::BLUE);
        assert_eq!(fb.get_pixel(5, 5), Some(Rgba::BLUE));
        assert_eq!(fb.get_pixel(7, 4), Some(Rgba::BLUE));
        assert_eq!(fb.get_pixel(0, 0), Some(Rgba::WHITE));
    }

    #[test]
    fn test_gradient_runs_bottom_to_top() {
        let mut fb = blank(4, 10);
        let rect = [
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(4.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        fill_polygon(&mut fb, &rect, |t| Rgba::BLACK.lerp(Rgba::WHITE, t));
        let top = fb.get_pixel(0, 0).unwrap();
        let bottom = fb.get_pixel(0, 9).unwrap();
        assert!(top.r > 200);
        assert!(bottom.r < 55);
    }

    #[test]
    fn test_clips_outside_framebuffer() {
        let mut fb = blank(4, 4);
        let big = [
            Point::new(-10.0, -10.0),
            Point::new(20.0, -10.0),
            Point::new(20.0, 20.0),
            Point::new(-10.0, 20.0),
        ];
        fill_polygon(&mut fb, &big, |_| Rgba::GREEN);
        assert_eq!(fb.count_color(Rgba::GREEN), 16);
    }

    #[test]
    fn test_degenerate_polygons_are_ignored() {
        let mut fb = blank(4, 4);
        fill_polygon(&mut fb, &[Point::ORIGIN, Point::new(3.0, 3.0)], |_| Rgba::RED);
        let line = [Point::new(0.0, 2.0), Point::new(4.0, 2.0), Point::new(2.0, 2.0)];
        fill_polygon(&mut fb, &line, |_| Rgba::RED);
        assert_eq!(fb.count_color(Rgba::RED), 0);
    }

    #[test]
    fn test_fill_square_sizes() {
        let mut fb = blank(10, 10);
        fill_square(&mut fb, Point::new(3.5, 3.5), 1.0, 1.0, Rgba::RED);
        assert_eq!(fb.count_color(Rgba::RED), 1);
        assert_eq!(fb.get_pixel(3, 3), Some(Rgba::RED));

        fill_square(&mut fb, Point::new(6.5, 6.5), 2.0, 2.0, Rgba::BLUE);
        assert_eq!(fb.count_color(Rgba::BLUE), 4);

        // Sub-pixel size still plots one pixel
        fill_square(&mut fb, Point::new(1.2, 8.7), 0.3, 0.3, Rgba::GREEN);
        assert_eq!(fb.count_color(Rgba::GREEN), 1);
        assert_eq!(fb.get_pixel(1, 8), Some(Rgba::GREEN));
    }
}
