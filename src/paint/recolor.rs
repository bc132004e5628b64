//! Brightness-to-tint image recoloring
//!
//! Maps each pixel's grayscale brightness onto the line between an ink color
//! and white: black pixels take the full ink, white pixels stay white, and
//! midtones blend linearly. Alpha passes through untouched.

use image::{Rgba, RgbaImage};

use crate::math::interpolation::{lerp, unit_clamp};
use crate::paint::palette::Tint;

/// Recolor an image with an ink tint
///
/// Returns a new buffer with the same dimensions; the source is never
/// mutated, so the same original can be recolored with a different ink on
/// every frame. Brightness is the plain channel average, not a luminance
/// weighting.
pub fn recolor(source: &RgbaImage, tint: Tint) -> RgbaImage {
    let mut output = RgbaImage::new(source.width(), source.height());

    for (x, y, pixel) in source.enumerate_pixels() {
        let Rgba([r, g, b, a]) = *pixel;

        let brightness = (u16::from(r) + u16::from(g) + u16::from(b)) as f32 / 3.0;
        let factor = unit_clamp(brightness / 255.0);

        output.put_pixel(
            x,
            y,
            Rgba([
                mix_channel(tint.r, factor),
                mix_channel(tint.g, factor),
                mix_channel(tint.b, factor),
                a,
            ]),
        );
    }

    output
}

// Blend one ink channel toward white by the brightness factor
fn mix_channel(ink: u8, factor: f32) -> u8 {
    lerp(f32::from(ink), 255.0, factor).round().clamp(0.0, 255.0) as u8
}
