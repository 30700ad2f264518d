//! Pixel-generating rasterization algorithms.
//!
//! Every generator is a lazy, pure iterator over pixel positions: no state
//! survives between calls and nothing is plotted here. Callers hand the
//! emitted positions to whatever surface they draw on.
//!
//! # Algorithms
//!
//! - **DDA Line**: real-valued increments, rounded at emission
//! - **Bresenham's Line**: integer error accumulator, all octants in one loop
//! - **Midpoint Circle**: integer decision term with 8-way symmetry
//! - **Circle/Arc Fan**: equal-angle rim samples for filled areas
//!
//! # Preconditions
//!
//! Coordinates must be finite and radii non-negative. The `try_new`
//! constructors check this and return [`crate::Error`]; the plain
//! constructors assume it.
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Pitteway, M. L. V. (1967). "Algorithm for drawing ellipses or hyperbolae with a
//!   digital plotter."

mod bresenham;
mod dda;
mod fan;
mod midpoint;
mod step;

use std::collections::HashSet;

pub use bresenham::BresenhamLine;
pub use dda::{DdaLine, DdaSubpixel};
pub use fan::{ArcFan, CircleFan, MIN_SEGMENTS};
pub use midpoint::MidpointCircle;
pub use step::{major_extent, major_steps, step_sign};

use crate::geometry::Pixel;

/// Collect pixels, dropping repeats but keeping first-seen order.
///
/// The midpoint generator emits coincident candidates on octant
/// boundaries; plotting surfaces that blend need them removed.
pub fn dedup_pixels<I>(pixels: I) -> Vec<Pixel>
where
    I: IntoIterator<Item = Pixel>,
{
    let mut seen = HashSet::new();
    pixels.into_iter().filter(|p| seen.insert(*p)).collect()
}
