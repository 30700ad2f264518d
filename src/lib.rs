//! # office-raster
//!
//! Classic pixel rasterization algorithms and an animated home-office scene
//! drawn with them.
//!
//! The [`raster`] generators (DDA line, Bresenham line, midpoint circle) are
//! pure iterators over integer pixel positions. The [`scene`] module composes
//! a room from those pixels plus filled polygons and triangle fans, and the
//! [`render`] module rasterizes the result into a [`framebuffer::Framebuffer`]
//! that [`output`] writes as PNG.
//!
//! ## Quick Start
//!
//! ```
//! use office_raster::prelude::*;
//!
//! let line: Vec<Pixel> = BresenhamLine::new(Pixel::new(0, 0), Pixel::new(5, 2)).collect();
//! assert_eq!(line.first(), Some(&Pixel::new(0, 0)));
//! assert_eq!(line.last(), Some(&Pixel::new(5, 2)));
//!
//! let anim = AnimationState::new().advance(10, 0.016);
//! let list = Scene::default().compose(&anim)?;
//! let mut fb = Framebuffer::new(400, 250)?;
//! Renderer::new().render(&list, &mut fb);
//! let png = PngEncoder::to_bytes(&fb)?;
//! assert!(!png.is_empty());
//! # Ok::<(), office_raster::Error>(())
//! ```
//!
//! ## References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Foley, J. D., et al. (1990). *Computer Graphics: Principles and Practice*, ch. 3.

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and color space conversions.
pub mod color;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Geometric primitives (pixels, points, rectangles).
pub mod geometry;

/// 2D affine transforms.
pub mod transform;

// ============================================================================
// Rasterization
// ============================================================================

/// Line and circle generators.
pub mod raster;

// ============================================================================
// Scene and Rendering
// ============================================================================

/// Animated home-office scene.
pub mod scene;

/// Display list rasterization.
pub mod render;

/// PNG output.
pub mod output;

/// Render configuration.
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for office-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use office_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{Hsv, Rgba};
    pub use crate::config::RenderConfig;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Circle, LineSegment, Pixel, Point, Rect};
    pub use crate::output::{FrameWriter, PngEncoder};
    pub use crate::raster::{dedup_pixels, BresenhamLine, CircleFan, DdaLine, MidpointCircle};
    pub use crate::render::{Renderer, Viewport};
    pub use crate::scene::{AnimationState, DisplayList, Scene, SceneLayout};
    pub use crate::transform::Transform;
}

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export trueno for direct access to SIMD operations.
pub use trueno;
