//! Progress display for frame batches

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static FRAME_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Frames: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates progress display for a batch of rendered frames
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager with no active bar
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Initialize the batch bar for the expected frame count
    pub fn initialize(&mut self, frame_count: usize) {
        let bar = ProgressBar::new(frame_count as u64);
        bar.set_style(FRAME_STYLE.clone());
        self.bar = Some(bar);
    }

    /// Show the filename of the frame being rendered
    pub fn start_frame(&self, name: &str) {
        if let Some(bar) = &self.bar {
            bar.set_message(name.to_string());
        }
    }

    /// Advance the batch bar past a completed frame
    pub fn complete_frame(&self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_with_message("All frames rendered");
        }
    }
}
