//! Canvas zones and anchor classification
//!
//! Each anchor dot is assigned to at most one of four canvas zones based on
//! proportional band boundaries. Classification order is significant: the top
//! band wins regardless of x, the right band only inside the vertical middle
//! band, then bottom, then left. Anchors in the central block satisfy none of
//! the predicates and stay unassigned, shrinking the eligible placement set.

use ndarray::Array2;

use crate::io::configuration::{FAR_BAND_FRACTION, NEAR_BAND_FRACTION};
use crate::spatial::grid::{AnchorPoint, DotGrid};

/// One of the four named canvas regions used to constrain placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    /// Band above 0.28 of the canvas height
    Top,
    /// Band right of 0.72 of the canvas width, inside the vertical middle
    Right,
    /// Band below 0.72 of the canvas height
    Bottom,
    /// Band left of 0.28 of the canvas width, inside the vertical middle
    Left,
}

impl Zone {
    /// The four zones in draw order
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// Lowercase region name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }
}

/// Classify a canvas position into a zone
///
/// The branch order is load-bearing: a corner point with y < 0.28H is Top no
/// matter its x, while a corner with y > 0.72H is Bottom. Points inside the
/// central block (and only those) fall through every branch and return `None`.
pub fn classify_point(x: f32, y: f32, canvas_width: u32, canvas_height: u32) -> Option<Zone> {
    let top_edge = canvas_height as f32 * NEAR_BAND_FRACTION;
    let bottom_edge = canvas_height as f32 * FAR_BAND_FRACTION;
    let left_edge = canvas_width as f32 * NEAR_BAND_FRACTION;
    let right_edge = canvas_width as f32 * FAR_BAND_FRACTION;

    if y < top_edge {
        Some(Zone::Top)
    } else if x > right_edge && y >= top_edge && y <= bottom_edge {
        Some(Zone::Right)
    } else if y > bottom_edge {
        Some(Zone::Bottom)
    } else if x < left_edge && y >= top_edge && y <= bottom_edge {
        Some(Zone::Left)
    } else {
        None
    }
}

/// Zone membership for every anchor of a dot grid
///
/// Computed once per grid and treated as read-only afterwards: for a fixed
/// canvas size and grid dimensions the mapping never changes between frames.
#[derive(Debug, Clone)]
pub struct ZoneMap {
    top: Vec<AnchorPoint>,
    right: Vec<AnchorPoint>,
    bottom: Vec<AnchorPoint>,
    left: Vec<AnchorPoint>,
    membership: Array2<Option<Zone>>,
}

impl ZoneMap {
    /// Classify every anchor of the grid into its zone
    ///
    /// Per-zone sequences preserve the grid's row-major anchor order. The
    /// membership matrix is indexed by (row, col) and holds `None` for
    /// unassigned anchors.
    pub fn classify(grid: &DotGrid) -> Self {
        let mut top = Vec::new();
        let mut right = Vec::new();
        let mut bottom = Vec::new();
        let mut left = Vec::new();
        let mut membership = Array2::from_elem((grid.rows(), grid.cols()), None);

        for anchor in grid.anchors() {
            let zone = classify_point(anchor.x, anchor.y, grid.width(), grid.height());

            match zone {
                Some(Zone::Top) => top.push(*anchor),
                Some(Zone::Right) => right.push(*anchor),
                Some(Zone::Bottom) => bottom.push(*anchor),
                Some(Zone::Left) => left.push(*anchor),
                None => {}
            }

            if let Some(cell) = membership.get_mut([anchor.row, anchor.col]) {
                *cell = zone;
            }
        }

        Self {
            top,
            right,
            bottom,
            left,
            membership,
        }
    }

    /// Anchor points of a zone in row-major order
    pub fn points(&self, zone: Zone) -> &[AnchorPoint] {
        match zone {
            Zone::Top => &self.top,
            Zone::Right => &self.right,
            Zone::Bottom => &self.bottom,
            Zone::Left => &self.left,
        }
    }

    /// Zone membership matrix indexed by (row, col)
    pub const fn membership(&self) -> &Array2<Option<Zone>> {
        &self.membership
    }

    /// Total number of anchors assigned to any zone
    pub fn assigned_count(&self) -> usize {
        self.top.len() + self.right.len() + self.bottom.len() + self.left.len()
    }
}
