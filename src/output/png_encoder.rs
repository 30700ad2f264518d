//! PNG encoding of framebuffers and numbered frame sequences.
//!
//! Pure Rust PNG encoding using the `png` crate.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::framebuffer::Framebuffer;

/// PNG encoder for framebuffer output.
pub struct PngEncoder;

impl PngEncoder {
    /// Write a framebuffer to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(fb: &Framebuffer, path: P) -> Result<()> {
        let file = File::create(path)?;
        Self::encode(fb, BufWriter::new(file))
    }

    /// Encode a framebuffer to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_bytes(fb: &Framebuffer) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        Self::encode(fb, &mut buffer)?;
        Ok(buffer)
    }

    fn encode<W: Write>(fb: &Framebuffer, sink: W) -> Result<()> {
        let mut encoder = png::Encoder::new(sink, fb.width(), fb.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        // Stride padding must not reach the encoder
        writer.write_image_data(&fb.to_compact_pixels())?;
        writer.finish()?;
        Ok(())
    }
}

/// Writes numbered frames `<prefix>_0000.png`, `<prefix>_0001.png`, ...
/// into one directory.
#[derive(Debug, Clone)]
pub struct FrameWriter {
    dir: PathBuf,
    prefix: String,
    next: u32,
}

impl FrameWriter {
    /// Create the output directory if needed and start numbering at zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn create(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            prefix: prefix.into(),
            next: 0,
        })
    }

    /// Path the frame with `index` is written to.
    #[must_use]
    pub fn frame_path(&self, index: u32) -> PathBuf {
        self.dir.join(format!("{}_{index:04}.png", self.prefix))
    }

    /// Number of frames written so far.
    #[must_use]
    pub const fn frames_written(&self) -> u32 {
        self.next
    }

    /// Encode `fb` as the next frame and return its path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write(&mut self, fb: &Framebuffer) -> Result<PathBuf> {
        let path = self.frame_path(self.next);
        PngEncoder::write_to_file(fb, &path)?;
        log::debug!("wrote {}", path.display());
        self.next += 1;
        Ok(path)
    }
}
