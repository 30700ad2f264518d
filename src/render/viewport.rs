//! Scene-to-device coordinate mapping.

use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;
use crate::scene::{SCENE_HEIGHT, SCENE_WIDTH};

/// Maps the 800×500 y-up scene onto a y-down framebuffer.
///
/// The axes scale independently, so any output size shows the whole room.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: u32,
    height: u32,
    scale_x: f32,
    scale_y: f32,
}

impl Viewport {
    /// Viewport for a device of `width`×`height` pixels.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self::sized(width, height))
    }

    /// Viewport covering the whole framebuffer.
    #[must_use]
    pub fn for_framebuffer(fb: &Framebuffer) -> Self {
        Self::sized(fb.width(), fb.height())
    }

    fn sized(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            scale_x: width as f32 / SCENE_WIDTH,
            scale_y: height as f32 / SCENE_HEIGHT,
        }
    }

    /// Device width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Device height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Device pixels per scene unit along x and y.
    #[must_use]
    pub const fn scale(&self) -> (f32, f32) {
        (self.scale_x, self.scale_y)
    }

    /// Map a scene point to device coordinates.
    #[must_use]
    pub fn to_device(&self, p: Point) -> Point {
        Point::new(p.x * self.scale_x, (SCENE_HEIGHT - p.y) * self.scale_y)
    }

    /// Map a device point back to scene coordinates.
    #[must_use]
    pub fn to_scene(&self, p: Point) -> Point {
        Point::new(p.x / self.scale_x, SCENE_HEIGHT - p.y / self.scale_y)
    }
}
