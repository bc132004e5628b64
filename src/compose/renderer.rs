//! Sketch state and frame compositing
//!
//! The sketch owns the immutable asset pool, the cached grid layout, and the
//! seeded selector. Each activation plans a fresh layout and composites it
//! synchronously: white background, dot grid, then the four tinted
//! illustrations in multiplicative blend mode.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::compose::plan::RenderPlan;
use crate::compose::selection::RandomSelector;
use crate::io::assets::ImageAsset;
use crate::io::configuration::{
    CANVAS_HEIGHT, CANVAS_WIDTH, DOT_COLS, DOT_DIAMETER, DOT_ROWS, IMAGE_SCALE,
    PLACEMENTS_PER_FRAME,
};
use crate::io::error::{Result, invalid_source_data};
use crate::paint::blend;
use crate::paint::recolor::recolor;
use crate::spatial::grid::DotGrid;
use crate::spatial::zones::ZoneMap;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Sketch parameters controlling canvas, grid, and placement geometry
#[derive(Clone, Copy, Debug)]
pub struct SketchConfig {
    /// Canvas width in pixels
    pub canvas_width: u32,
    /// Canvas height in pixels
    pub canvas_height: u32,
    /// Number of dot rows spanning the canvas height
    pub dot_rows: usize,
    /// Number of dot columns spanning the canvas width
    pub dot_cols: usize,
    /// Diameter of each grid dot in pixels
    pub dot_diameter: f32,
    /// Scale applied to every placed illustration
    pub image_scale: f32,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            dot_rows: DOT_ROWS,
            dot_cols: DOT_COLS,
            dot_diameter: DOT_DIAMETER,
            image_scale: IMAGE_SCALE,
        }
    }
}

/// The sketch: asset pool, cached layout, and seeded randomness
///
/// Rendering is synchronous and runs to completion; the only state shared
/// between frames is the read-only zone mapping, the immutable assets, and
/// the advancing random stream.
pub struct Sketch {
    assets: Vec<ImageAsset>,
    config: SketchConfig,
    grid: DotGrid,
    zone_map: ZoneMap,
    selector: RandomSelector,
}

impl Sketch {
    /// Build a sketch from loaded assets and a seed
    ///
    /// The dot grid and zone mapping are computed once here and reused by
    /// every frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid dimensions are invalid or the asset pool
    /// is smaller than the number of placements per frame.
    pub fn new(assets: Vec<ImageAsset>, config: SketchConfig, seed: u64) -> Result<Self> {
        if assets.len() < PLACEMENTS_PER_FRAME {
            return Err(invalid_source_data(&format!(
                "need at least {PLACEMENTS_PER_FRAME} assets, found {}",
                assets.len()
            )));
        }

        let grid = DotGrid::new(
            config.canvas_width,
            config.canvas_height,
            config.dot_rows,
            config.dot_cols,
        )?;
        let zone_map = ZoneMap::classify(&grid);
        let selector = RandomSelector::new(seed);

        Ok(Self {
            assets,
            config,
            grid,
            zone_map,
            selector,
        })
    }

    /// Re-randomize and render one frame
    ///
    /// This is the activation entry point: called once at startup and again
    /// for every subsequent trigger.
    ///
    /// # Errors
    ///
    /// Returns an error if plan generation fails.
    pub fn redraw(&mut self) -> Result<RgbaImage> {
        let plan = RenderPlan::generate(&self.zone_map, self.assets.len(), &mut self.selector)?;
        Ok(self.render_with_plan(&plan))
    }

    /// Composite a plan onto a fresh canvas
    ///
    /// Pure with respect to sketch state: the same plan always produces the
    /// same pixels. Placements whose asset is missing or empty, or whose zone
    /// held no anchors, are skipped without aborting the frame.
    pub fn render_with_plan(&self, plan: &RenderPlan) -> RgbaImage {
        let mut canvas = RgbaImage::new(self.config.canvas_width, self.config.canvas_height);
        blend::fill(&mut canvas, WHITE);

        self.draw_dot_grid(&mut canvas);

        for placement in &plan.placements {
            let Some(asset) = self.assets.get(placement.asset_index) else {
                continue;
            };
            if !asset.is_drawable() {
                continue;
            }
            let Some(anchor) = placement.anchor else {
                continue;
            };

            let tinted = recolor(&asset.image, placement.tint);

            let scaled_width = self.scaled_dimension(asset.image.width());
            let scaled_height = self.scaled_dimension(asset.image.height());
            let scaled = imageops::resize(&tinted, scaled_width, scaled_height, FilterType::Triangle);

            let left = (anchor.x - scaled_width as f32 / 2.0).round() as i64;
            let top = (anchor.y - scaled_height as f32 / 2.0).round() as i64;
            blend::blit_multiply(&mut canvas, &scaled, left, top);
        }

        canvas
    }

    // Dots are drawn row-major over the background, under every placement
    fn draw_dot_grid(&self, canvas: &mut RgbaImage) {
        for anchor in self.grid.anchors() {
            blend::fill_circle(canvas, anchor.x, anchor.y, self.config.dot_diameter, WHITE);
        }
    }

    fn scaled_dimension(&self, natural: u32) -> u32 {
        (natural as f32 * self.config.image_scale).round().max(1.0) as u32
    }

    /// The cached zone mapping
    pub const fn zone_map(&self) -> &ZoneMap {
        &self.zone_map
    }

    /// The anchor dot grid
    pub const fn grid(&self) -> &DotGrid {
        &self.grid
    }

    /// Number of loaded assets
    pub fn asset_count(&self) -> usize {
        self.assets.len()
    }
}
