//! Sketch constants and runtime configuration defaults

// Reference canvas, a 16:9 surface matching the original print layout
/// Canvas width in pixels
pub const CANVAS_WIDTH: u32 = 900;
/// Canvas height in pixels
pub const CANVAS_HEIGHT: u32 = 506;

// Dot grid proportions chosen for the wide format
/// Number of dot rows spanning the canvas height
pub const DOT_ROWS: usize = 8;
/// Number of dot columns spanning the canvas width
pub const DOT_COLS: usize = 12;
/// Diameter of each grid dot in pixels
pub const DOT_DIAMETER: f32 = 6.0;

/// Scale applied to every placed illustration
pub const IMAGE_SCALE: f32 = 0.85;

// Zone boundaries as fractions of the canvas dimensions
/// Fraction of the canvas height (or width) below which a point is in the
/// top (or left) band
pub const NEAR_BAND_FRACTION: f32 = 0.28;
/// Fraction of the canvas height (or width) above which a point is in the
/// bottom (or right) band
pub const FAR_BAND_FRACTION: f32 = 0.72;

/// Number of illustrations placed per frame
pub const PLACEMENTS_PER_FRAME: usize = 4;

// Default values for configurable parameters
/// Fixed seed for reproducible frames
pub const DEFAULT_SEED: u64 = 42;

/// Default number of frames rendered per invocation
pub const DEFAULT_FRAME_COUNT: usize = 1;

// Output settings
/// Stem used for exported frame filenames
pub const FRAME_STEM: &str = "frame";
/// Filename of the animated frame-sequence export
pub const GIF_FILENAME: &str = "frames.gif";
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 600;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
