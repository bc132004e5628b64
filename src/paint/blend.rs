//! Compositing primitives for the canvas
//!
//! The canvas is an opaque RGBA buffer. Sprites are drawn with multiplicative
//! blending so placed illustrations darken, never lighten, whatever sits
//! beneath them; the sprite's own alpha then weights the blended result over
//! the destination. All primitives clip at the canvas edges.

use image::{Rgba, RgbaImage};

/// Fill the whole canvas with a single color
pub fn fill(canvas: &mut RgbaImage, color: Rgba<u8>) {
    for pixel in canvas.pixels_mut() {
        *pixel = color;
    }
}

/// Draw a filled circle centered on (cx, cy), no stroke
///
/// Pixels whose coordinates fall within the radius are filled; anything
/// outside the canvas is clipped.
pub fn fill_circle(canvas: &mut RgbaImage, cx: f32, cy: f32, diameter: f32, color: Rgba<u8>) {
    let radius = diameter / 2.0;
    let radius_squared = radius * radius;

    let min_x = (cx - radius).floor().max(0.0) as u32;
    let min_y = (cy - radius).floor().max(0.0) as u32;
    let max_x = ((cx + radius).ceil() as i64).min(i64::from(canvas.width()) - 1);
    let max_y = ((cy + radius).ceil() as i64).min(i64::from(canvas.height()) - 1);

    if max_x < 0 || max_y < 0 {
        return;
    }

    for y in min_y..=max_y as u32 {
        for x in min_x..=max_x as u32 {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            if dx.mul_add(dx, dy * dy) <= radius_squared {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}

/// Multiply one source channel against a destination channel
///
/// Both values are treated as fractions of 255, so white is the identity and
/// the result can never exceed either input.
pub const fn multiply_channel(source: u8, destination: u8) -> u8 {
    ((source as u16 * destination as u16) / 255) as u8
}

/// Blit a sprite onto the canvas in multiplicative blend mode
///
/// `left`/`top` position the sprite's top-left corner and may be negative;
/// out-of-canvas pixels are clipped. Each sprite pixel is channel-multiplied
/// against the destination, then alpha-composited over it. The canvas alpha
/// is left untouched.
pub fn blit_multiply(canvas: &mut RgbaImage, sprite: &RgbaImage, left: i64, top: i64) {
    for (sprite_x, sprite_y, pixel) in sprite.enumerate_pixels() {
        let canvas_x = left + i64::from(sprite_x);
        let canvas_y = top + i64::from(sprite_y);

        if canvas_x < 0
            || canvas_y < 0
            || canvas_x >= i64::from(canvas.width())
            || canvas_y >= i64::from(canvas.height())
        {
            continue;
        }

        let Rgba([src_r, src_g, src_b, src_a]) = *pixel;
        let destination = *canvas.get_pixel(canvas_x as u32, canvas_y as u32);
        let Rgba([dst_r, dst_g, dst_b, dst_a]) = destination;

        let blended = Rgba([
            composite_channel(multiply_channel(src_r, dst_r), dst_r, src_a),
            composite_channel(multiply_channel(src_g, dst_g), dst_g, src_a),
            composite_channel(multiply_channel(src_b, dst_b), dst_b, src_a),
            dst_a,
        ]);

        canvas.put_pixel(canvas_x as u32, canvas_y as u32, blended);
    }
}

// Weight the blended value over the destination by the sprite alpha
const fn composite_channel(blended: u8, destination: u8, alpha: u8) -> u8 {
    let delta = blended as i32 - destination as i32;
    (destination as i32 + delta * alpha as i32 / 255) as u8
}
