//! Generative collage sketch scattering tinted illustrations over a dot grid
//!
//! The system classifies a fixed grid of anchor dots into four canvas zones,
//! tints a random subset of source images with palette colors, and composites
//! each one onto a random anchor of its assigned zone using multiplicative
//! blending. Every frame is recomputed from a seeded random source.

#![forbid(unsafe_code)]

/// Frame planning and rendering including random selection and compositing
pub mod compose;
/// Input/output operations and error handling
pub mod io;
/// Mathematical utilities for channel interpolation
pub mod math;
/// Pixel-level painting: palette, recoloring, and blend primitives
pub mod paint;
/// Dot grid construction and zone classification
pub mod spatial;

pub use io::error::{Result, SketchError};
