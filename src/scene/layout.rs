//! Scene layout configuration.
//!
//! Every furniture item can be shifted, scaled or hidden from YAML; the
//! room carries its own palette. Defaults reproduce the stock home office.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::error::Result;
use crate::geometry::Point;
use crate::transform::Transform;

use super::animation::PARTICLE_COUNT;

/// Scene width in scene units.
pub const SCENE_WIDTH: f32 = 800.0;

/// Scene height in scene units.
pub const SCENE_HEIGHT: f32 = 500.0;

/// Placement of one furniture item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemLayout {
    /// Translation applied to every shape of the item.
    #[serde(default)]
    pub offset: Point,

    /// Uniform scale about the item's anchor point.
    #[serde(default = "default_scale")]
    pub scale: f32,

    /// Whether the item is drawn at all.
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}
fn default_scale() -> f32 {
    1.0
}

impl Default for ItemLayout {
    fn default() -> Self {
        Self {
            offset: Point::ORIGIN,
            scale: default_scale(),
            visible: default_visible(),
        }
    }
}

impl ItemLayout {
    /// An item hidden from the frame.
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            visible: false,
            ..Self::default()
        }
    }

    /// An item shifted by `(dx, dy)`.
    #[must_use]
    pub fn shifted(dx: f32, dy: f32) -> Self {
        Self {
            offset: Point::new(dx, dy),
            ..Self::default()
        }
    }

    /// Placement transform: scale about `anchor`, then shift by the offset.
    ///
    /// # Errors
    ///
    /// Returns an error if the offset or scale is not finite.
    pub fn transform(&self, anchor: Point) -> Result<Transform> {
        self.offset.ensure_finite("item offset")?;
        Point::new(self.scale, self.scale).ensure_finite("item scale")?;
        Ok(Transform::scale_about(anchor, self.scale, self.scale)
            .then(Transform::translate(self.offset.x, self.offset.y)))
    }
}

/// Walls, floor and baseboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoomLayout {
    /// Y coordinate where the floor meets the wall.
    #[serde(default = "default_horizon")]
    pub horizon: f32,

    /// Wall color at the horizon.
    #[serde(default = "default_wall_bottom")]
    pub wall_bottom: Rgba,

    /// Wall color at the ceiling.
    #[serde(default = "default_wall_top")]
    pub wall_top: Rgba,

    /// Floor color at the front edge.
    #[serde(default = "default_floor_front")]
    pub floor_front: Rgba,

    /// Floor color at the horizon.
    #[serde(default = "default_floor_back")]
    pub floor_back: Rgba,

    /// Number of DDA wood-grain lines across the floor.
    #[serde(default = "default_grain_lines")]
    pub grain_lines: u32,
}

fn default_horizon() -> f32 {
    100.0
}
fn default_wall_bottom() -> Rgba {
    Rgba::from_unit(0.85, 0.65, 0.45)
}
fn default_wall_top() -> Rgba {
    Rgba::from_unit(0.95, 0.78, 0.58)
}
fn default_floor_front() -> Rgba {
    Rgba::from_unit(0.55, 0.40, 0.28)
}
fn default_floor_back() -> Rgba {
    Rgba::from_unit(0.72, 0.56, 0.40)
}
fn default_grain_lines() -> u32 {
    8
}

impl Default for RoomLayout {
    fn default() -> Self {
        Self {
            horizon: default_horizon(),
            wall_bottom: default_wall_bottom(),
            wall_top: default_wall_top(),
            floor_front: default_floor_front(),
            floor_back: default_floor_back(),
            grain_lines: default_grain_lines(),
        }
    }
}

/// Dust particles drifting through the light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleLayout {
    /// Resting x position of each particle.
    #[serde(default = "default_particle_x")]
    pub x: [f32; PARTICLE_COUNT],

    /// Horizontal wobble amplitude.
    #[serde(default = "default_wobble")]
    pub wobble: f32,

    /// Whether particles are drawn.
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_particle_x() -> [f32; PARTICLE_COUNT] {
    [150.0, 300.0, 450.0, 550.0, 700.0]
}
fn default_wobble() -> f32 {
    10.0
}

impl Default for ParticleLayout {
    fn default() -> Self {
        Self {
            x: default_particle_x(),
            wobble: default_wobble(),
            visible: default_visible(),
        }
    }
}

/// Placement of everything in the home office.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SceneLayout {
    /// Walls and floor.
    #[serde(default)]
    pub room: RoomLayout,
    /// Dust particles.
    #[serde(default)]
    pub particles: ParticleLayout,
    /// Ceiling fan.
    #[serde(default)]
    pub ceiling_fan: ItemLayout,
    /// Hanging lamp.
    #[serde(default)]
    pub lamp: ItemLayout,
    /// Wall bookshelf.
    #[serde(default)]
    pub bookshelf: ItemLayout,
    /// Wall clock with pendulum.
    #[serde(default)]
    pub clock: ItemLayout,
    /// Smart home panel.
    #[serde(default)]
    pub smart_panel: ItemLayout,
    /// Desk with drawer units.
    #[serde(default)]
    pub desk: ItemLayout,
    /// Monitor.
    #[serde(default)]
    pub computer: ItemLayout,
    /// Keyboard.
    #[serde(default)]
    pub keyboard: ItemLayout,
    /// Book stack on the desk.
    #[serde(default)]
    pub books: ItemLayout,
    /// Printer.
    #[serde(default)]
    pub printer: ItemLayout,
    /// Pen holder.
    #[serde(default)]
    pub organizer: ItemLayout,
    /// Coffee cup with steam.
    #[serde(default)]
    pub coffee_cup: ItemLayout,
    /// Office chair.
    #[serde(default)]
    pub chair: ItemLayout,
}

impl SceneLayout {
    /// Number of visible furniture items, room and particles included.
    #[must_use]
    pub fn visible_items(&self) -> usize {
        let items = [
            self.ceiling_fan,
            self.lamp,
            self.bookshelf,
            self.clock,
            self.smart_panel,
            self.desk,
            self.computer,
            self.keyboard,
            self.books,
            self.printer,
            self.organizer,
            self.coffee_cup,
            self.chair,
        ];
        1 + usize::from(self.particles.visible) + items.iter().filter(|i| i.visible).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let layout = SceneLayout::default();
        assert_eq!(layout.room.grain_lines, 8);
        assert_eq!(layout.particles.x[2], 450.0);
        assert_eq!(layout.visible_items(), 15);
        assert_eq!(layout.lamp.offset, Point::ORIGIN);
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = r"
lamp:
  offset: { x: 40.0, y: -10.0 }
  scale: 1.5
chair:
  visible: false
room:
  grain_lines: 3
  wall_top: { r: 10, g: 20, b: 30 }
";
        let layout: SceneLayout = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(layout.lamp.offset, Point::new(40.0, -10.0));
        assert!(layout.lamp.visible);
        assert_eq!(layout.lamp.scale, 1.5);
        assert_eq!(layout.desk.scale, 1.0);
        assert!(!layout.chair.visible);
        assert_eq!(layout.room.grain_lines, 3);
        assert_eq!(layout.room.wall_top, Rgba::rgb(10, 20, 30));
        assert_eq!(layout.room.horizon, 100.0);
        assert_eq!(layout.visible_items(), 14);
    }

    #[test]
    fn test_hidden() {
        assert!(!ItemLayout::hidden().visible);
    }

    #[test]
    fn test_transform_scales_about_anchor() {
        let item = ItemLayout {
            scale: 2.0,
            ..ItemLayout::shifted(10.0, 0.0)
        };
        let anchor = Point::new(100.0, 50.0);
        let t = item.transform(anchor).unwrap();
        assert_eq!(t.apply(anchor), Point::new(110.0, 50.0));
        assert_eq!(t.apply(Point::new(101.0, 50.0)), Point::new(112.0, 50.0));
    }

    #[test]
    fn test_transform_rejects_non_finite() {
        assert!(ItemLayout::shifted(f32::NAN, 0.0).transform(Point::ORIGIN).is_err());
        let item = ItemLayout {
            scale: f32::INFINITY,
            ..ItemLayout::default()
        };
        assert!(item.transform(Point::ORIGIN).is_err());
    }
}
