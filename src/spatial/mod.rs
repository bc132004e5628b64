//! Dot grid construction and zone classification
//!
//! This module contains the spatial layout of the sketch:
//! - Anchor dot grid spanning the canvas
//! - Zone membership for constraining image placement

/// Anchor dot grid spanning the canvas
pub mod grid;
/// Canvas zones and anchor classification
pub mod zones;

pub use grid::{AnchorPoint, DotGrid};
pub use zones::{Zone, ZoneMap};
