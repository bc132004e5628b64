//! Frame planning and rendering
//!
//! This module contains the orchestration of a frame:
//! - Seeded random selection primitives
//! - Randomized placement planning
//! - Compositing the plan onto a canvas

/// Randomized placement planning
pub mod plan;
/// Sketch state and frame compositing
pub mod renderer;
/// Seeded random selection primitives
pub mod selection;

pub use plan::{Placement, RenderPlan};
pub use renderer::{Sketch, SketchConfig};
pub use selection::RandomSelector;
