//! Randomized placement planning
//!
//! A frame is fully described by a `RenderPlan`: which assets were selected,
//! which zone and ink each one received, and which anchor it lands on. The
//! plan is recomputed from scratch on every activation and consumed by a pure
//! drawing pass, so no selection state survives between frames.

use crate::compose::selection::RandomSelector;
use crate::io::configuration::PLACEMENTS_PER_FRAME;
use crate::io::error::Result;
use crate::paint::palette::{PALETTE, Tint};
use crate::spatial::grid::AnchorPoint;
use crate::spatial::zones::{Zone, ZoneMap};

/// One image placement within a frame
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// Index into the asset pool
    pub asset_index: usize,
    /// Zone this placement was assigned to
    pub zone: Zone,
    /// Ink color applied to the asset
    pub tint: Tint,
    /// Anchor the scaled image is centered on; `None` when the zone holds no
    /// anchors, in which case the placement is skipped at draw time
    pub anchor: Option<AnchorPoint>,
}

/// Complete randomized layout for a single frame
///
/// Invariants: asset indices are pairwise distinct, tints are pairwise
/// distinct, and the placements use each zone exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    /// Placements in selection order
    pub placements: Vec<Placement>,
}

impl RenderPlan {
    /// Generate a fresh plan from the seeded selector
    ///
    /// Draws distinct asset indices, permutes the four zones so selection
    /// position i maps to shuffled zone i, draws distinct palette inks the
    /// same way, and picks one anchor uniformly from each assigned zone.
    ///
    /// # Errors
    ///
    /// Returns an error if the asset pool is smaller than the number of
    /// placements per frame.
    pub fn generate(
        zone_map: &ZoneMap,
        asset_count: usize,
        selector: &mut RandomSelector,
    ) -> Result<Self> {
        let asset_indices = selector.distinct_indices(asset_count, PLACEMENTS_PER_FRAME)?;

        let mut zones = Zone::ALL;
        selector.shuffle(&mut zones);

        let ink_indices = selector.distinct_indices(PALETTE.len(), PLACEMENTS_PER_FRAME)?;

        let mut placements = Vec::with_capacity(PLACEMENTS_PER_FRAME);
        for ((asset_index, zone), ink_index) in
            asset_indices.iter().zip(zones.iter()).zip(&ink_indices)
        {
            let tint = PALETTE
                .get(*ink_index)
                .copied()
                .unwrap_or(Tint::new(0, 0, 0));
            let anchor = selector.pick(zone_map.points(*zone)).copied();

            placements.push(Placement {
                asset_index: *asset_index,
                zone: *zone,
                tint,
                anchor,
            });
        }

        Ok(Self { placements })
    }
}
