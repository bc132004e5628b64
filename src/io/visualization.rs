//! Frame capture and GIF generation
//!
//! Records the rendered frame sequence and exports it as an animated GIF, a
//! stand-in for watching the sketch re-randomize on successive activations.

use std::path::Path;

use image::codecs::gif::GifEncoder;
use image::{Delay, Frame, RgbaImage};

use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;
use crate::io::error::{Result, SketchError, invalid_source_data};

/// Captures rendered frames for animated export
pub struct FrameCapture {
    frames: Vec<RgbaImage>,
}

impl FrameCapture {
    /// Create a capture sized for the expected frame count
    pub fn new(expected_frames: usize) -> Self {
        Self {
            frames: Vec::with_capacity(expected_frames),
        }
    }

    /// Record a rendered frame
    pub fn record_frame(&mut self, frame: &RgbaImage) {
        self.frames.push(frame.clone());
    }

    /// Number of frames captured so far
    pub const fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Export the captured frames as an animated GIF
    ///
    /// The requested delay is clamped to the minimum that viewers reliably
    /// honor, and the final frame lingers so the last layout stays readable.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.frames.is_empty() {
            return Err(invalid_source_data(
                &"no frames captured for visualization",
            ));
        }

        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);

        if let Some(parent) = output_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SketchError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| SketchError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut frames = Vec::with_capacity(self.frames.len() + 1);
        for img in &self.frames {
            frames.push(Frame::from_parts(
                img.clone(),
                0,
                0,
                Delay::from_numer_denom_ms(effective_delay_ms, 1),
            ));
        }

        // Final frame displays longer for better visibility
        if let Some(last) = self.frames.last() {
            frames.push(Frame::from_parts(
                last.clone(),
                0,
                0,
                Delay::from_numer_denom_ms(effective_delay_ms * 3, 1),
            ));
        }

        let mut encoder = GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| SketchError::FrameExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }
}
