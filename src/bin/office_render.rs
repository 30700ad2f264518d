//! office-render: render the animated home office to PNG frames.
//!
//! Steps the animation once per frame and writes `frame_0000.png`,
//! `frame_0001.png`, ... into the output directory.
//!
//! Run: `office-render --frames 60 --out frames/`
//! Verbose: `RUST_LOG=debug office-render`

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use office_raster::config::RenderConfig;
use office_raster::framebuffer::Framebuffer;
use office_raster::output::FrameWriter;
use office_raster::render::Renderer;
use office_raster::scene::{AnimationState, Scene};

/// Render the animated home office to PNG frames
#[derive(Parser, Debug)]
#[command(name = "office-render")]
#[command(version)]
#[command(about = "Render the animated home-office scene to PNG frames", long_about = None)]
struct Cli {
    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of frames to render
    #[arg(short, long)]
    frames: Option<u32>,

    /// Frame width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Frame height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Output directory
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Seconds between frames (0 < dt <= 0.1, otherwise 0.016)
    #[arg(long)]
    dt: Option<f32>,
}

impl Cli {
    /// File configuration with command-line overrides applied.
    fn resolve(&self) -> Result<RenderConfig> {
        let mut config = match &self.config {
            Some(path) => RenderConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => RenderConfig::default(),
        };

        let output = &mut config.output;
        if let Some(frames) = self.frames {
            output.frames = frames;
        }
        if let Some(width) = self.width {
            output.width = width;
        }
        if let Some(height) = self.height {
            output.height = height;
        }
        if let Some(out) = &self.out {
            output.out_dir.clone_from(out);
        }
        if let Some(dt) = self.dt {
            output.dt = dt;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.resolve()?;
    let output = &config.output;

    let scene = Scene::new(config.layout);
    let renderer = Renderer::new();
    let mut fb = Framebuffer::new(output.width, output.height)?;
    let mut writer = FrameWriter::create(&output.out_dir, output.prefix.as_str())
        .with_context(|| format!("creating {}", output.out_dir.display()))?;

    let dt = config.frame_dt();
    if config.dt_replaced() {
        log::warn!("time step {} out of range, using {dt}", output.dt);
    }

    let start = Instant::now();
    let mut anim = AnimationState::new();
    for frame in 0..output.frames {
        anim = anim.update(dt);
        let list = scene
            .compose(&anim)
            .with_context(|| format!("composing frame {frame}"))?;
        renderer.render(&list, &mut fb);
        if log::log_enabled!(log::Level::Debug) {
            let (min, max, mean) = fb.luminance_stats();
            log::debug!("frame {frame}: luminance min {min:.3} max {max:.3} mean {mean:.3}");
        }
        writer
            .write(&fb)
            .with_context(|| format!("writing frame {frame}"))?;
    }

    log::info!(
        "rendered {} frame(s) at {}x{} into {} in {:.2?}",
        writer.frames_written(),
        output.width,
        output.height,
        output.out_dir.display(),
        start.elapsed()
    );
    Ok(())
}
