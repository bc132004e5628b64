//! Command-line interface for batch frame rendering

use clap::Parser;
use std::path::PathBuf;

use crate::compose::renderer::{Sketch, SketchConfig};
use crate::io::assets::{export_frame_png, load_assets};
use crate::io::configuration::{
    DEFAULT_FRAME_COUNT, DEFAULT_SEED, FRAME_STEM, GIF_FILENAME, GIF_FRAME_DELAY_MS,
};
use crate::io::error::Result;
use crate::io::progress::ProgressManager;
use crate::io::visualization::FrameCapture;

#[derive(Parser)]
#[command(name = "risoscatter")]
#[command(
    author,
    version,
    about = "Scatter tinted illustrations across a dot grid"
)]
/// Command-line arguments for the collage renderer
pub struct Cli {
    /// Directory containing the source illustrations
    #[arg(value_name = "ASSETS")]
    pub assets: PathBuf,

    /// Output directory for rendered frames
    #[arg(short, long, default_value = "frames")]
    pub output: PathBuf,

    /// Random seed for reproducible layouts
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of frames to render
    #[arg(short = 'n', long, default_value_t = DEFAULT_FRAME_COUNT)]
    pub frames: usize,

    /// Export the frame sequence as an animated GIF
    #[arg(short, long)]
    pub visualize: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Canvas width in pixels
    #[arg(short = 'w', long)]
    pub width: Option<u32>,

    /// Canvas height in pixels
    #[arg(short = 'H', long)]
    pub height: Option<u32>,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates asset loading and the frame-rendering loop
pub struct SketchRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl SketchRunner {
    /// Create a new runner with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Render frames according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if asset loading, sketch construction, rendering, or
    /// export fails.
    pub fn run(&mut self) -> Result<()> {
        let assets = load_assets(&self.cli.assets)?;

        let mut config = SketchConfig::default();
        if let Some(width) = self.cli.width {
            config.canvas_width = width;
        }
        if let Some(height) = self.cli.height {
            config.canvas_height = height;
        }

        let mut sketch = Sketch::new(assets, config, self.cli.seed)?;

        let frame_count = self.cli.frames.max(1);
        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(frame_count);
        }

        let mut capture = self
            .cli
            .visualize
            .then(|| FrameCapture::new(frame_count));

        for index in 0..frame_count {
            let name = Self::frame_filename(index);
            if let Some(ref pm) = self.progress_manager {
                pm.start_frame(&name);
            }

            let frame = sketch.redraw()?;
            export_frame_png(&frame, &self.cli.output.join(&name))?;

            if let Some(ref mut cap) = capture {
                cap.record_frame(&frame);
            }
            if let Some(ref pm) = self.progress_manager {
                pm.complete_frame();
            }
        }

        if let Some(ref cap) = capture {
            cap.export_gif(&self.cli.output.join(GIF_FILENAME), GIF_FRAME_DELAY_MS)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn frame_filename(index: usize) -> String {
        let number = index + 1;
        format!("{FRAME_STEM}_{number:03}.png")
    }
}
