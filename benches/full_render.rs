//! Performance measurement for complete frame rendering

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use image::{Rgba, RgbaImage};
use risoscatter::compose::renderer::{Sketch, SketchConfig};
use risoscatter::io::assets::ImageAsset;
use std::hint::black_box;

fn synthetic_pool() -> Vec<ImageAsset> {
    (0..11)
        .map(|index| {
            let image = RgbaImage::from_fn(64, 64, |x, y| {
                Rgba([
                    (x * 4) as u8,
                    (y * 4) as u8,
                    ((x + y + index) * 2) as u8,
                    255,
                ])
            });
            ImageAsset::new(format!("asset_{index:02}"), image)
        })
        .collect()
}

/// Measures a full redraw: plan generation, recoloring, scaling, compositing
fn bench_redraw(c: &mut Criterion) {
    let Ok(mut sketch) = Sketch::new(synthetic_pool(), SketchConfig::default(), 12345) else {
        return;
    };

    c.bench_function("redraw_frame", |b| {
        b.iter(|| {
            let Ok(frame) = sketch.redraw() else {
                return;
            };
            black_box(frame);
        });
    });
}

criterion_group!(benches, bench_redraw);
criterion_main!(benches);
