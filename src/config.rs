//! Render configuration.
//!
//! YAML file with defaults for every field; command-line flags override
//! file values.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::scene::{effective_dt, SceneLayout, FALLBACK_DT};

/// Output and animation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Frame width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,

    /// Frame height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,

    /// Number of frames to render.
    #[serde(default = "default_frames")]
    pub frames: u32,

    /// Seconds between frames.
    #[serde(default = "default_dt")]
    pub dt: f32,

    /// Directory receiving the PNG files.
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// File name prefix of each frame.
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

fn default_width() -> u32 {
    800
}
fn default_height() -> u32 {
    500
}
fn default_frames() -> u32 {
    1
}
fn default_dt() -> f32 {
    FALLBACK_DT
}
fn default_out_dir() -> PathBuf {
    PathBuf::from("frames")
}
fn default_prefix() -> String {
    "frame".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            frames: default_frames(),
            dt: default_dt(),
            out_dir: default_out_dir(),
            prefix: default_prefix(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Furniture placement.
    #[serde(default)]
    pub layout: SceneLayout,
}

impl RenderConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] for a missing file, [`Error::Io`]
    /// for any other read failure and [`Error::ConfigParse`] for bad YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::ConfigNotFound(path.display().to_string()),
            _ => Error::Io(e),
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using default configuration");
                Self::default()
            }
        }
    }

    /// Check that the output can be produced.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] for a zero-sized frame.
    pub fn validate(&self) -> Result<()> {
        let OutputConfig { width, height, .. } = self.output;
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(())
    }

    /// Time step actually applied per frame.
    #[must_use]
    pub fn frame_dt(&self) -> f32 {
        effective_dt(self.output.dt)
    }

    /// Whether the configured time step is unusable and replaced by the
    /// fallback. NaN counts as replaced.
    #[must_use]
    pub fn dt_replaced(&self) -> bool {
        self.frame_dt().to_bits() != self.output.dt.to_bits()
    }
}
