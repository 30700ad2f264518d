//! Drawing routines for the home office, one per furniture item.
//!
//! Coordinates are scene units with the origin at the bottom-left of the
//! 800×500 room. Each routine records into a [`Canvas`] and reads only the
//! animation values it needs.

use std::f32::consts::PI;

use crate::color::{Hsv, Rgba};
use crate::error::Result;
use crate::geometry::{Pixel, Point};
use crate::transform::Transform;

use super::animation::AnimationState;
use super::canvas::{Canvas, POINT_SIZE};
use super::display_list::Paint;
use super::layout::{ParticleLayout, RoomLayout, SCENE_HEIGHT, SCENE_WIDTH};

fn gray(level: f32) -> Rgba {
    Rgba::from_unit(level, level, level)
}

fn gradient(bottom: Rgba, top: Rgba) -> Paint {
    Paint::VerticalGradient { bottom, top }
}

/// Back wall, floor with wood grain, and baseboard.
pub(super) fn room(canvas: &mut Canvas, layout: &RoomLayout) -> Result<()> {
    let horizon = layout.horizon;
    canvas.rect(
        0.0,
        horizon,
        SCENE_WIDTH,
        SCENE_HEIGHT - horizon,
        gradient(layout.wall_bottom, layout.wall_top),
    );
    canvas.rect(
        0.0,
        0.0,
        SCENE_WIDTH,
        horizon,
        gradient(layout.floor_front, layout.floor_back),
    );

    // Grain runs slightly downhill to the right.
    let grain = Rgba::from_unit(0.5, 0.38, 0.25);
    let spacing = horizon * 0.12;
    for i in 0..layout.grain_lines {
        let y = spacing * (i as f32 + 1.0);
        canvas.dda(Point::new(0.0, y), Point::new(SCENE_WIDTH, y - 2.0), 1.0, grain)?;
    }

    canvas.rect(0.0, horizon - 7.0, SCENE_WIDTH, 2.0, gray(0.7));
    canvas.rect(0.0, horizon - 5.0, SCENE_WIDTH, 8.0, gray(0.92));
    Ok(())
}

/// Dust particles, each wobbling around its resting column.
pub(super) fn particles(
    canvas: &mut Canvas,
    layout: &ParticleLayout,
    anim: &AnimationState,
) -> Result<()> {
    for (i, (&x, &y)) in layout.x.iter().zip(anim.particle_y.iter()).enumerate() {
        let phase = i as f32;
        let brightness = 0.7 + 0.3 * (anim.glow_phase + phase).sin();
        let color = Rgba::from_unit(brightness, 0.95 * brightness, 0.8 * brightness);
        let px = x + (y * 0.05 + phase).sin() * layout.wobble;
        canvas.circle(Point::new(px, y), 2.0, 8, color)?;
    }
    Ok(())
}

/// Ceiling fan with four rotating blades.
pub(super) fn ceiling_fan(canvas: &mut Canvas, anim: &AnimationState) -> Result<()> {
    let hub = Point::new(205.0, 475.0);
    canvas.rect(195.0, 480.0, 20.0, 20.0, gray(0.4));
    canvas.circle(hub, 15.0, 20, gray(0.3))?;

    let spin = Transform::rotate(anim.fan_angle).then(Transform::translate(hub.x, hub.y));
    let blade_color = Rgba::from_unit(0.35, 0.25, 0.15);
    canvas.with_transform(spin, |c| {
        for i in 0..4 {
            c.with_transform(Transform::rotate(i as f32 * 90.0), |c| {
                c.polygon(
                    vec![
                        Point::new(-5.0, 0.0),
                        Point::new(5.0, 0.0),
                        Point::new(8.0, 50.0),
                        Point::new(-8.0, 50.0),
                    ],
                    blade_color,
                );
                Ok(())
            })?;
        }
        Ok(())
    })?;

    canvas.circle(hub, 8.0, 15, gray(0.5))
}

/// Hanging lamp swinging about its ceiling mount.
pub(super) fn lamp(canvas: &mut Canvas, anim: &AnimationState) -> Result<()> {
    let swing = Transform::rotate_about(Point::new(400.0, 480.0), anim.lamp_angle);
    canvas.with_transform(swing, |c| {
        c.bresenham(Pixel::new(400, 500), Pixel::new(400, 430), POINT_SIZE, gray(0.2));

        let shade = Rgba::from_unit(0.85, 0.2, 0.15);
        c.polygon(
            vec![
                Point::new(360.0, 430.0),
                Point::new(440.0, 430.0),
                Point::new(420.0, 400.0),
                Point::new(380.0, 400.0),
            ],
            shade,
        );
        c.dome(Point::new(400.0, 430.0), (40.0, 15.0), shade)?;

        let glow = 0.6 + 0.4 * (anim.glow_phase * 1.5).sin();
        c.circle(
            Point::new(400.0, 390.0),
            18.0,
            25,
            Rgba::from_unit(glow, 0.9 * glow, 0.5 * glow),
        )?;
        c.circle(Point::new(400.0, 395.0), 8.0, 20, Rgba::from_unit(1.0, 0.98, 0.8))?;

        let ray = Rgba::from_unit(0.5 * glow, 0.475 * glow, 0.18 * glow);
        let center = Point::new(400.0, 390.0);
        for i in 0..8 {
            let angle = (i as f32 * 45.0).to_radians() + anim.glow_phase * 0.2;
            let (sin, cos) = angle.sin_cos();
            let reach = 25.0 + 5.0 * (anim.glow_phase + i as f32).sin();
            c.dda(
                Point::new(center.x + 12.0 * cos, center.y + 12.0 * sin),
                Point::new(center.x + reach * cos, center.y + reach * sin),
                1.0,
                ray,
            )?;
        }
        Ok(())
    })
}

/// Wall shelf with books and Bresenham support brackets.
pub(super) fn bookshelf(canvas: &mut Canvas) {
    canvas.rect(550.0, 380.0, 180.0, 8.0, Rgba::from_unit(0.55, 0.35, 0.2));

    let books = [
        (560.0, 388.0, 25.0, 45.0, Rgba::from_unit(0.8, 0.2, 0.2)),
        (590.0, 388.0, 20.0, 40.0, Rgba::from_unit(0.2, 0.3, 0.7)),
        (615.0, 388.0, 22.0, 50.0, Rgba::from_unit(0.9, 0.5, 0.1)),
        (645.0, 388.0, 35.0, 12.0, Rgba::from_unit(0.3, 0.7, 0.3)),
        (648.0, 400.0, 30.0, 10.0, Rgba::from_unit(0.9, 0.9, 0.3)),
        (700.0, 388.0, 25.0, 35.0, Rgba::from_unit(0.4, 0.75, 0.4)),
    ];
    for (x, y, w, h, color) in books {
        canvas.rect(x, y, w, h, color);
    }

    let bracket = Rgba::from_unit(0.4, 0.25, 0.15);
    for x in [560, 710] {
        canvas.bresenham(Pixel::new(x, 380), Pixel::new(x, 370), POINT_SIZE, bracket);
        canvas.bresenham(Pixel::new(x, 370), Pixel::new(x + 15, 380), POINT_SIZE, bracket);
    }
}

/// Wall clock with sweeping hands and a pendulum.
pub(super) fn clock(canvas: &mut Canvas, anim: &AnimationState) -> Result<()> {
    let c = Point::new(730.0, 420.0);
    let face = Rgba::from_unit(0.98, 0.96, 0.92);

    canvas.circle(Point::new(733.0, 417.0), 34.0, 40, Rgba::from_unit(0.7, 0.5, 0.35))?;
    canvas.circle(c, 36.0, 40, Rgba::from_unit(0.35, 0.22, 0.12))?;
    canvas.circle(c, 32.0, 40, Rgba::from_unit(0.55, 0.38, 0.22))?;
    canvas.circle(c, 28.0, 40, face)?;
    canvas.circle(Point::new(731.0, 419.0), 26.0, 40, Rgba::from_unit(0.92, 0.90, 0.86))?;
    canvas.circle(c, 24.0, 40, face)?;

    // Angles are measured clockwise from 12 o'clock.
    let at = |angle: f32, r: f32| Point::new(c.x + r * angle.sin(), c.y + r * angle.cos());

    for i in 0..12u8 {
        let angle = (f32::from(i) * 30.0).to_radians();
        let (inner, size, color) = if i % 3 == 0 {
            (20.0, 3.0, gray(0.15))
        } else {
            (22.0, POINT_SIZE, gray(0.3))
        };
        canvas.dda(at(angle, inner), at(angle, 26.0), size, color)?;
    }

    let hour = anim.clock_minute.to_radians();
    let (hs, hc) = hour.sin_cos();
    canvas.polygon(
        vec![
            Point::new(c.x - 2.0 * hc, c.y + 2.0 * hs),
            Point::new(c.x + 2.0 * hc, c.y - 2.0 * hs),
            Point::new(c.x + 14.0 * hs + hc, c.y + 14.0 * hc - hs),
            Point::new(c.x + 14.0 * hs - hc, c.y + 14.0 * hc + hs),
        ],
        gray(0.1),
    );

    let minute = (anim.clock_second * 0.5).to_radians();
    let (ms, mc) = minute.sin_cos();
    canvas.polygon(
        vec![
            Point::new(c.x - 1.5 * mc, c.y + 1.5 * ms),
            Point::new(c.x + 1.5 * mc, c.y - 1.5 * ms),
            at(minute, 20.0),
        ],
        gray(0.15),
    );

    let red = Rgba::from_unit(0.85, 0.15, 0.1);
    let second = anim.clock_second.to_radians();
    canvas.line(at(second, -6.0), at(second, 24.0), 1.0, red);
    canvas.circle(at(second, -5.0), 2.0, 10, red)?;

    let brass = Rgba::from_unit(0.85, 0.7, 0.3);
    let brass_light = Rgba::from_unit(0.95, 0.85, 0.5);
    canvas.circle(c, 4.0, 15, brass)?;
    canvas.circle(c, 2.0, 12, brass_light)?;

    let bob_x = c.x + 15.0 * anim.pendulum_angle.to_radians().sin();
    canvas.line(
        Point::new(c.x, 384.0),
        Point::new(bob_x, 375.0),
        1.0,
        Rgba::from_unit(0.3, 0.2, 0.1),
    );
    canvas.circle(Point::new(bob_x, 370.0), 8.0, 20, brass)?;
    canvas.circle(Point::new(bob_x, 370.0), 5.0, 15, brass_light)
}

/// Smart home panel with music visualizer, climate widget and pulsing
/// touch button.
pub(super) fn smart_panel(canvas: &mut Canvas, anim: &AnimationState) -> Result<()> {
    const X: f32 = 55.0;
    const Y: f32 = 300.0;
    const W: f32 = 95.0;
    const H: f32 = 130.0;

    canvas.rect(X - 6.0, Y - 6.0, W + 12.0, H + 12.0, Rgba::from_unit(0.18, 0.18, 0.2));
    canvas.rect(X, Y, W, H, Rgba::from_unit(0.1, 0.1, 0.14));

    let glow = anim.panel_glow;
    let pulse = 0.5 + 0.5 * glow.sin();
    let wave = (glow * 0.5).sin();
    canvas.rect(
        X + 5.0,
        Y + 5.0,
        W - 10.0,
        H - 10.0,
        gradient(
            Rgba::from_unit(0.08 + 0.04 * wave, 0.12 + 0.08 * pulse, 0.28 + 0.12 * pulse),
            Rgba::from_unit(0.18 + 0.12 * pulse, 0.2 + 0.1 * wave, 0.4 + 0.12 * pulse),
        ),
    );

    for (i, bar) in anim.music_bars.iter().enumerate() {
        let height = 12.0 + bar * (H - 50.0);
        let hue = 0.02 + i as f32 * 0.18;
        canvas.rect(
            X + 8.0 + i as f32 * 16.0,
            Y + 12.0,
            10.0,
            height,
            Rgba::from(Hsv::new(hue, 0.95, 1.0)),
        );
    }

    canvas.rect(X + 10.0, Y + H - 55.0, 45.0, 20.0, Rgba::from_unit(1.0, 0.55, 0.15));
    canvas.rect(X + 12.0, Y + H - 53.0, 41.0, 16.0, Rgba::from_unit(0.25, 0.1, 0.05));
    let digits = Rgba::from_unit(1.0, 0.85, 0.4);
    canvas.rect(X + 15.0, Y + H - 49.0, 18.0, 8.0, digits);
    canvas.rect(X + 37.0, Y + H - 49.0, 8.0, 8.0, digits);

    let wifi = Point::new(X + W - 20.0, Y + H - 20.0);
    for i in 0..3u8 {
        let i = f32::from(i);
        let radius = 4.0 + i * 4.0;
        let brightness = 0.6 + 0.4 * (glow * 3.0 - i * 0.6).sin();
        let arc = (45..=135)
            .step_by(10)
            .map(|deg| {
                let angle = (deg as f32).to_radians();
                Point::new(wifi.x + radius * angle.cos(), wifi.y + radius * angle.sin())
            })
            .collect();
        canvas.polyline(
            arc,
            2.0,
            Rgba::from_unit(0.2 * brightness, 0.95 * brightness, 0.5 * brightness),
        );
    }
    canvas.circle(Point::new(wifi.x, wifi.y - 4.0), 2.0, 10, Rgba::from_unit(0.3, 1.0, 0.6))?;

    canvas.circle(
        Point::new(X + 18.0, Y + H - 18.0),
        4.0,
        12,
        Rgba::from_unit(0.25 + 0.75 * pulse, 0.2, 0.4),
    )?;

    let touch = 1.0 + 0.18 * (glow * 1.2).sin();
    let place = Transform::scale(touch, touch).then(Transform::translate(X + W - 35.0, Y + 22.0));
    canvas.with_transform(place, |c| {
        c.circle(
            Point::ORIGIN,
            8.0,
            18,
            Rgba::from_unit(0.2 * pulse, 0.45 * pulse, 0.85 * pulse),
        )?;
        c.circle(
            Point::ORIGIN,
            4.0,
            12,
            Rgba::from_unit(0.4 + 0.2 * pulse, 0.75 + 0.2 * pulse, 1.0),
        )
    })
}

/// Left edges of the two drawer units.
const DRAWER_UNITS: [i32; 2] = [80, 600];

/// Bottom edges of the three drawer fronts in each unit.
const DRAWER_ROWS: [i32; 3] = [120, 80, 40];

/// Desk top, two drawer units with DDA handles and midpoint wheels.
pub(super) fn desk(canvas: &mut Canvas) -> Result<()> {
    canvas.rect(80.0, 180.0, 640.0, 15.0, gray(0.5));

    for unit in DRAWER_UNITS {
        let x = unit as f32;
        canvas.rect(x, 50.0, 120.0, 130.0, gray(0.6));
        for row in DRAWER_ROWS {
            canvas.rect(x + 5.0, row as f32, 110.0, 35.0, gray(0.55));
        }
        for row in DRAWER_ROWS {
            let (from, to) = drawer_handle(unit, row);
            canvas.dda(from, to, POINT_SIZE, gray(0.3))?;
        }
    }

    let wheels: Vec<Pixel> = DRAWER_UNITS
        .iter()
        .flat_map(|&x| [Pixel::new(x + 20, 45), Pixel::new(x + 100, 45)])
        .collect();
    for &wheel in &wheels {
        canvas.midpoint_circle(wheel, 8, POINT_SIZE, gray(0.2));
    }
    for wheel in wheels {
        canvas.circle(wheel.to_point(), 7.0, 15, gray(0.15))?;
    }
    Ok(())
}

/// Handle endpoints for the drawer whose front starts at `(unit_x, row_y)`.
fn drawer_handle(unit_x: i32, row_y: i32) -> (Point, Point) {
    let y = (row_y + 17) as f32;
    (
        Point::new((unit_x + 40) as f32, y),
        Point::new((unit_x + 80) as f32, y),
    )
}

/// Monitor on its stand with an animated screen.
pub(super) fn computer(canvas: &mut Canvas, anim: &AnimationState) -> Result<()> {
    canvas.rect(270.0, 195.0, 60.0, 10.0, gray(0.2));
    canvas.rect(290.0, 205.0, 20.0, 30.0, gray(0.2));

    canvas.rect(208.0, 233.0, 184.0, 134.0, gray(0.1));
    canvas.rect(210.0, 235.0, 180.0, 130.0, gray(0.18));

    let wave = anim.screen_wave.sin() * 0.1;
    canvas.rect(
        220.0,
        245.0,
        160.0,
        110.0,
        gradient(
            Rgba::from_unit(0.15 + wave, 0.5 + wave, 0.55),
            Rgba::from_unit(0.25, 0.75 + wave * 0.5, 0.7 + wave * 0.3),
        ),
    );

    let scan = Rgba::from_unit(0.35, 0.85, 0.8);
    for i in 0..4u8 {
        let y = 250.0 + (anim.screen_wave * 20.0 + f32::from(i) * 28.0) % 100.0;
        canvas.dda(Point::new(222.0, y), Point::new(378.0, y), 1.0, scan)?;
    }

    let led = 0.5 + 0.5 * (anim.glow_phase * 2.0).sin();
    canvas.circle(
        Point::new(385.0, 240.0),
        3.0,
        10,
        Rgba::from_unit(0.1, 0.4 + 0.5 * led, 0.1),
    )
}

/// Keyboard base with two rows of keys.
pub(super) fn keyboard(canvas: &mut Canvas) {
    canvas.rect(230.0, 195.0, 140.0, 8.0, gray(0.25));
    let key = gray(0.35);
    for row in 0..2u8 {
        for col in 0..12u8 {
            canvas.rect(
                235.0 + f32::from(col) * 11.0,
                196.0 + f32::from(row) * 3.0,
                9.0,
                2.0,
                key,
            );
        }
    }
}

/// Three stacked books with DDA spines.
pub(super) fn books(canvas: &mut Canvas) -> Result<()> {
    canvas.rect(580.0, 260.0, 90.0, 15.0, Rgba::from_unit(0.85, 0.3, 0.5));
    canvas.rect(585.0, 275.0, 85.0, 12.0, Rgba::from_unit(0.2, 0.6, 0.6));
    canvas.rect(583.0, 287.0, 87.0, 14.0, Rgba::from_unit(0.9, 0.85, 0.3));

    canvas.dda(
        Point::new(580.0, 260.0),
        Point::new(580.0, 275.0),
        POINT_SIZE,
        Rgba::from_unit(0.7, 0.2, 0.4),
    )?;
    canvas.dda(
        Point::new(585.0, 275.0),
        Point::new(585.0, 287.0),
        POINT_SIZE,
        Rgba::from_unit(0.15, 0.5, 0.5),
    )
}

/// Printer with paper tray and status buttons.
pub(super) fn printer(canvas: &mut Canvas) -> Result<()> {
    canvas.rect(580.0, 195.0, 100.0, 50.0, gray(0.85));
    canvas.rect(580.0, 245.0, 100.0, 15.0, gray(0.75));
    canvas.rect(590.0, 200.0, 80.0, 8.0, gray(0.3));
    canvas.rect(595.0, 230.0, 70.0, 5.0, gray(0.2));

    canvas.circle(Point::new(665.0, 255.0), 4.0, 12, Rgba::from_unit(0.2, 0.6, 0.2))?;
    canvas.circle(Point::new(650.0, 255.0), 4.0, 12, Rgba::from_unit(0.6, 0.2, 0.2))
}

/// Pen holder with two Bresenham pens and one DDA pen.
pub(super) fn organizer(canvas: &mut Canvas) -> Result<()> {
    canvas.rect(165.0, 195.0, 45.0, 6.0, Rgba::from_unit(0.35, 0.2, 0.1));
    canvas.rect(168.0, 201.0, 39.0, 10.0, Rgba::from_unit(0.8, 0.75, 0.65));
    canvas.rect(172.0, 211.0, 20.0, 18.0, Rgba::from_unit(0.25, 0.25, 0.3));
    canvas.rect(174.0, 213.0, 16.0, 14.0, Rgba::from_unit(0.18, 0.18, 0.22));

    canvas.bresenham(
        Pixel::new(178, 227),
        Pixel::new(180, 250),
        POINT_SIZE,
        Rgba::from_unit(0.8, 0.15, 0.15),
    );
    canvas.bresenham(
        Pixel::new(186, 227),
        Pixel::new(188, 252),
        POINT_SIZE,
        Rgba::from_unit(0.1, 0.6, 0.8),
    );
    canvas.dda(
        Point::new(182.0, 227.0),
        Point::new(182.0, 247.0),
        POINT_SIZE,
        Rgba::from_unit(0.95, 0.85, 0.2),
    )
}

/// Coffee cup with three curling steam wisps.
pub(super) fn coffee_cup(canvas: &mut Canvas, anim: &AnimationState) {
    canvas.polygon(
        vec![
            Point::new(100.0, 195.0),
            Point::new(130.0, 195.0),
            Point::new(127.0, 235.0),
            Point::new(103.0, 235.0),
        ],
        Rgba::from_unit(0.85, 0.85, 0.8),
    );
    canvas.rect(98.0, 235.0, 35.0, 8.0, Rgba::from_unit(0.4, 0.25, 0.15));
    canvas.rect(102.0, 205.0, 27.0, 18.0, Rgba::from_unit(0.5, 0.35, 0.2));

    let steam = Rgba::from_unit(0.85, 0.85, 0.9);
    let phase = anim.clock_second * 0.05;
    for (x, height, offset, sway) in [
        (108.0, 22.0, 0.0, 3.5),
        (115.0, 26.0, 0.6, 4.0),
        (122.0, 22.0, 1.1, 3.2),
    ] {
        canvas.polyline(steam_curl(Point::new(x, 245.0), height, phase + offset, sway), 2.0, steam);
    }
}

/// Vertices of one steam wisp rising `height` units from `base`.
///
/// Lateral sway tapers to 65% at the top.
fn steam_curl(base: Point, height: f32, phase: f32, sway: f32) -> Vec<Point> {
    const SAMPLES: u8 = 24;
    (0..=SAMPLES)
        .map(|i| {
            let t = f32::from(i) / f32::from(SAMPLES);
            let taper = 1.0 - t * 0.35;
            Point::new(
                base.x + (phase + t * PI * 1.2).sin() * sway * taper,
                base.y + t * height,
            )
        })
        .collect()
}

/// Office chair with midpoint wheels and Bresenham legs.
pub(super) fn chair(canvas: &mut Canvas) -> Result<()> {
    let wheels = [Pixel::new(400, 35), Pixel::new(370, 45), Pixel::new(430, 45)];
    for wheel in wheels {
        canvas.midpoint_circle(wheel, 6, POINT_SIZE, gray(0.2));
    }
    for wheel in wheels {
        canvas.circle(wheel.to_point(), 5.0, 12, gray(0.15))?;
    }

    let leg = gray(0.25);
    canvas.bresenham(Pixel::new(400, 35), Pixel::new(400, 90), POINT_SIZE, leg);
    canvas.bresenham(Pixel::new(400, 45), Pixel::new(370, 45), POINT_SIZE, leg);
    canvas.bresenham(Pixel::new(400, 45), Pixel::new(430, 45), POINT_SIZE, leg);

    canvas.rect(360.0, 90.0, 80.0, 20.0, gray(0.15));
    canvas.rect(365.0, 110.0, 70.0, 90.0, gray(0.12));
    canvas.dome(Point::new(400.0, 200.0), (35.0, 15.0), gray(0.12))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::display_list::Shape;

    #[test]
    fn test_drawer_handles_follow_unit() {
        assert_eq!(
            drawer_handle(80, 40),
            (Point::new(120.0, 57.0), Point::new(160.0, 57.0))
        );
        assert_eq!(
            drawer_handle(600, 40),
            (Point::new(640.0, 57.0), Point::new(680.0, 57.0))
        );
        assert_eq!(drawer_handle(600, 120).0, Point::new(640.0, 137.0));
    }

    #[test]
    fn test_right_unit_handles_stay_inside_unit() {
        let mut canvas = Canvas::new();
        desk(&mut canvas).unwrap();
        let list = canvas.finish();
        // Handles are the only pixel commands at handle rows
        let handle_pixels: Vec<Pixel> = list
            .pixels()
            .filter(|p| [57, 97, 137].contains(&p.y))
            .collect();
        assert_eq!(handle_pixels.len(), 6 * 41);
        assert!(handle_pixels
            .iter()
            .all(|p| (120..=160).contains(&p.x) || (640..=680).contains(&p.x)));
    }

    #[test]
    fn test_steam_curl_shape() {
        let curl = steam_curl(Point::new(108.0, 245.0), 22.0, 0.0, 3.5);
        assert_eq!(curl.len(), 25);
        assert_eq!(curl[0], Point::new(108.0, 245.0));
        assert!((curl[24].y - 267.0).abs() < 1e-4);
        assert!(curl.iter().all(|p| (p.x - 108.0).abs() <= 3.5 + 1e-4));
    }

    #[test]
    fn test_room_grain_lines() {
        let mut canvas = Canvas::new();
        room(&mut canvas, &RoomLayout::default()).unwrap();
        let list = canvas.finish();
        let grain = list
            .iter()
            .filter(|cmd| matches!(cmd.shape, Shape::Pixels { .. }))
            .count();
        assert_eq!(grain, 8);
        // DDA along 800 units emits 801 points per line
        assert_eq!(list.pixels().count(), 8 * 801);
    }

    #[test]
    fn test_lamp_swing_moves_bulb() {
        let mut still = Canvas::new();
        lamp(&mut still, &AnimationState::new()).unwrap();
        let mut swung = Canvas::new();
        let anim = AnimationState {
            lamp_angle: 8.0,
            ..AnimationState::new()
        };
        lamp(&mut swung, &anim).unwrap();

        let cord_end = |list: crate::scene::DisplayList| list.pixels().nth(70);
        assert_eq!(cord_end(still.finish()), Some(Pixel::new(400, 430)));
        // Lower cord end swings right for a positive (CCW) angle
        let moved = cord_end(swung.finish()).unwrap();
        assert!(moved.x > 400);
    }

    #[test]
    fn test_fan_blades_rotate() {
        let mut canvas = Canvas::new();
        let anim = AnimationState {
            fan_angle: 90.0,
            ..AnimationState::new()
        };
        ceiling_fan(&mut canvas, &anim).unwrap();
        let list = canvas.finish();
        let polygons: Vec<&Shape> = list
            .iter()
            .map(|c| &c.shape)
            .filter(|s| matches!(s, Shape::Polygon(_)))
            .collect();
        // mount + 4 blades
        assert_eq!(polygons.len(), 5);
        let Shape::Polygon(first_blade) = polygons[1] else {
            unreachable!()
        };
        // Blade 0 rotated 90 degrees CCW points to -x
        assert!((first_blade[2].x - 155.0).abs() < 1e-3);
    }

    #[test]
    fn test_every_routine_records() {
        let anim = AnimationState::new().advance(10, 0.05);
        let mut canvas = Canvas::new();
        smart_panel(&mut canvas, &anim).unwrap();
        clock(&mut canvas, &anim).unwrap();
        computer(&mut canvas, &anim).unwrap();
        keyboard(&mut canvas);
        books(&mut canvas).unwrap();
        printer(&mut canvas).unwrap();
        organizer(&mut canvas).unwrap();
        coffee_cup(&mut canvas, &anim);
        chair(&mut canvas).unwrap();
        bookshelf(&mut canvas);
        particles(&mut canvas, &ParticleLayout::default(), &anim).unwrap();
        assert!(canvas.finish().len() > 100);
    }
}
