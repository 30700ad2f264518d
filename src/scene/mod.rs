//! Animated home-office scene.
//!
//! A [`Scene`] turns an [`AnimationState`] into a [`DisplayList`]. The
//! furniture is drawn back to front with the rasterization generators
//! where they fit (lines, handles and outlines) and with polygons and fans
//! for filled areas.

mod animation;
mod canvas;
mod display_list;
mod furniture;
mod layout;

pub use animation::{
    effective_dt, AnimationState, Swing, FALLBACK_DT, MAX_DT, MUSIC_BAR_COUNT, PARTICLE_COUNT,
};
pub use canvas::{Canvas, POINT_SIZE};
pub use display_list::{DisplayList, DrawCommand, Paint, Shape};
pub use layout::{ItemLayout, ParticleLayout, RoomLayout, SceneLayout, SCENE_HEIGHT, SCENE_WIDTH};

use crate::error::Result;
use crate::geometry::Point;

/// The home office with a configurable layout.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    layout: SceneLayout,
}

impl Scene {
    /// Create a scene with the given layout.
    #[must_use]
    pub fn new(layout: SceneLayout) -> Self {
        Self { layout }
    }

    /// Layout in use.
    #[must_use]
    pub fn layout(&self) -> &SceneLayout {
        &self.layout
    }

    /// Build the display list for one frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout produces invalid geometry, for
    /// example a non-finite offset.
    pub fn compose(&self, anim: &AnimationState) -> Result<DisplayList> {
        let layout = &self.layout;
        let mut canvas = Canvas::new();

        furniture::room(&mut canvas, &layout.room)?;
        if layout.particles.visible {
            furniture::particles(&mut canvas, &layout.particles, anim)?;
        }

        place(&mut canvas, &layout.ceiling_fan, anchors::CEILING_FAN, |c| {
            furniture::ceiling_fan(c, anim)
        })?;
        place(&mut canvas, &layout.lamp, anchors::LAMP, |c| furniture::lamp(c, anim))?;
        place(&mut canvas, &layout.bookshelf, anchors::BOOKSHELF, |c| {
            furniture::bookshelf(c);
            Ok(())
        })?;
        place(&mut canvas, &layout.clock, anchors::CLOCK, |c| furniture::clock(c, anim))?;
        place(&mut canvas, &layout.smart_panel, anchors::SMART_PANEL, |c| {
            furniture::smart_panel(c, anim)
        })?;
        place(&mut canvas, &layout.desk, anchors::DESK, furniture::desk)?;
        place(&mut canvas, &layout.computer, anchors::COMPUTER, |c| {
            furniture::computer(c, anim)
        })?;
        place(&mut canvas, &layout.keyboard, anchors::KEYBOARD, |c| {
            furniture::keyboard(c);
            Ok(())
        })?;
        place(&mut canvas, &layout.books, anchors::BOOKS, furniture::books)?;
        place(&mut canvas, &layout.printer, anchors::PRINTER, furniture::printer)?;
        place(&mut canvas, &layout.organizer, anchors::ORGANIZER, furniture::organizer)?;
        place(&mut canvas, &layout.coffee_cup, anchors::COFFEE_CUP, |c| {
            furniture::coffee_cup(c, anim);
            Ok(())
        })?;
        place(&mut canvas, &layout.chair, anchors::CHAIR, furniture::chair)?;

        let list = canvas.finish();
        log::debug!(
            "composed {} draw commands from {} items",
            list.len(),
            layout.visible_items()
        );
        Ok(list)
    }
}

/// Point each item scales about: where it hangs from or rests on.
mod anchors {
    use crate::geometry::Point;

    pub(super) const CEILING_FAN: Point = Point::new(205.0, 500.0);
    pub(super) const LAMP: Point = Point::new(400.0, 500.0);
    pub(super) const BOOKSHELF: Point = Point::new(640.0, 380.0);
    pub(super) const CLOCK: Point = Point::new(730.0, 420.0);
    pub(super) const SMART_PANEL: Point = Point::new(102.5, 365.0);
    pub(super) const DESK: Point = Point::new(400.0, 37.0);
    pub(super) const COMPUTER: Point = Point::new(300.0, 195.0);
    pub(super) const KEYBOARD: Point = Point::new(300.0, 195.0);
    pub(super) const BOOKS: Point = Point::new(625.0, 260.0);
    pub(super) const PRINTER: Point = Point::new(630.0, 195.0);
    pub(super) const ORGANIZER: Point = Point::new(187.5, 195.0);
    pub(super) const COFFEE_CUP: Point = Point::new(115.0, 195.0);
    pub(super) const CHAIR: Point = Point::new(400.0, 29.0);
}

fn place<F>(canvas: &mut Canvas, item: &ItemLayout, anchor: Point, draw: F) -> Result<()>
where
    F: FnOnce(&mut Canvas) -> Result<()>,
{
    if !item.visible {
        return Ok(());
    }
    canvas.with_transform(item.transform(anchor)?, draw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::framebuffer::Framebuffer;
    use crate::geometry::Pixel;
    use crate::render::Renderer;

    #[test]
    fn test_compose_is_deterministic() {
        let scene = Scene::default();
        let anim = AnimationState::new().advance(30, 0.016);
        assert_eq!(scene.compose(&anim).unwrap(), scene.compose(&anim).unwrap());
    }

    #[test]
    fn test_room_is_drawn_first() {
        let list = Scene::default().compose(&AnimationState::new()).unwrap();
        let first = list.iter().next().unwrap();
        assert!(matches!(first.paint, Paint::VerticalGradient { .. }));
        assert_eq!(
            first.shape,
            Shape::Polygon(vec![
                Point::new(0.0, 100.0),
                Point::new(800.0, 100.0),
                Point::new(800.0, 500.0),
                Point::new(0.0, 500.0),
            ])
        );
    }

    #[test]
    fn test_chair_is_drawn_last() {
        let list = Scene::default().compose(&AnimationState::new()).unwrap();
        let last = list.iter().last().unwrap();
        // Chair back dome
        assert!(matches!(last.shape, Shape::Fan { .. }));
        assert_eq!(last.paint, Paint::Solid(Rgba::from_unit(0.12, 0.12, 0.12)));
    }

    #[test]
    fn test_hidden_items_are_skipped() {
        let full = Scene::default().compose(&AnimationState::new()).unwrap();
        let layout = SceneLayout {
            keyboard: ItemLayout::hidden(),
            ..SceneLayout::default()
        };
        let partial = Scene::new(layout).compose(&AnimationState::new()).unwrap();
        // keyboard base + 24 keys
        assert_eq!(full.len() - partial.len(), 25);
    }

    #[test]
    fn test_offset_moves_item() {
        let layout = SceneLayout {
            chair: ItemLayout::shifted(-100.0, 0.0),
            ..SceneLayout::default()
        };
        let base = Scene::default().compose(&AnimationState::new()).unwrap();
        let moved = Scene::new(layout).compose(&AnimationState::new()).unwrap();

        assert!(base.pixels().any(|p| p == Pixel::new(400, 90)));
        assert!(!moved.pixels().any(|p| p == Pixel::new(400, 90)));
        assert!(moved.pixels().any(|p| p == Pixel::new(300, 90)));
    }

    #[test]
    fn test_scale_keeps_anchor() {
        let layout = SceneLayout {
            chair: ItemLayout {
                scale: 2.0,
                ..ItemLayout::default()
            },
            ..SceneLayout::default()
        };
        let list = Scene::new(layout).compose(&AnimationState::new()).unwrap();
        // Center wheel sits on the anchor column, legs double in length
        assert!(list.pixels().any(|p| p == Pixel::new(400, 151)));
    }

    fn desk_only(desk: ItemLayout) -> SceneLayout {
        let hidden = ItemLayout::hidden();
        SceneLayout {
            particles: ParticleLayout {
                visible: false,
                ..ParticleLayout::default()
            },
            ceiling_fan: hidden,
            lamp: hidden,
            bookshelf: hidden,
            clock: hidden,
            smart_panel: hidden,
            desk,
            computer: hidden,
            keyboard: hidden,
            books: hidden,
            printer: hidden,
            organizer: hidden,
            coffee_cup: hidden,
            chair: hidden,
            ..SceneLayout::default()
        }
    }

    #[test]
    fn test_scaled_handle_renders_without_gaps() {
        // Top-left handle (120..=160, 137) lands on x 160..=280, y 337
        let desk = ItemLayout {
            scale: 3.0,
            ..ItemLayout::shifted(600.0, 0.0)
        };
        let list = Scene::new(desk_only(desk))
            .compose(&AnimationState::new())
            .unwrap();
        let mut fb = Framebuffer::new(800, 500).unwrap();
        Renderer::new().render(&list, &mut fb);

        let handle = fb.get_pixel(220, 162).unwrap();
        assert_ne!(fb.get_pixel(220, 150), Some(handle));
        for x in 157..=282 {
            assert_eq!(fb.get_pixel(x, 162), Some(handle), "gap at x = {x}");
        }
    }

    #[test]
    fn test_non_finite_offset_is_rejected() {
        let layout = SceneLayout {
            lamp: ItemLayout::shifted(f32::NAN, 0.0),
            ..SceneLayout::default()
        };
        assert!(Scene::new(layout).compose(&AnimationState::new()).is_err());
    }
}
