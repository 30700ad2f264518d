//! Error types for office-raster operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in office-raster operations.
///
/// Degenerate geometry (zero-length lines, zero radii) is never an error;
/// only inputs with no defined rasterization are rejected.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for framebuffer or viewport.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// A coordinate or length was NaN or infinite.
    #[error("Non-finite coordinate in {context}: ({x}, {y})")]
    NonFiniteCoordinate {
        /// Which input carried the bad value.
        context: &'static str,
        /// X component as given.
        x: f32,
        /// Y component as given.
        y: f32,
    },

    /// Circle radius below zero.
    #[error("Negative radius: {0}")]
    NegativeRadius(f32),

    /// Too few angular segments to enclose an area.
    #[error("Invalid segment count: {segments} (need at least {min})")]
    InvalidSegments {
        /// Requested segment count.
        segments: u32,
        /// Smallest accepted count.
        min: u32,
    },

    /// Configuration parsing error with line number.
    #[error("Configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed, 0 if unknown).
        line: usize,
        /// Parser message.
        message: String,
    },

    /// Configuration file could not be read.
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(String),
}
