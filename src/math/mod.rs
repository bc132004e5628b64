//! Mathematical utilities for the sketch

/// Linear interpolation for channel mixing
pub mod interpolation;
