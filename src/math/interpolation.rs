//! Linear interpolation for channel mixing
//!
//! Recoloring maps per-pixel brightness onto the line between a tint and
//! white, so all the sketch needs is a linear blend with a clamped parameter.

/// Linearly interpolate between `start` and `end`
///
/// `t` = 0 returns `start`, `t` = 1 returns `end`. Values in between mix
/// proportionally; `t` is not clamped here.
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    (end - start).mul_add(t, start)
}

/// Clamp a blend parameter to the unit interval
///
/// In-range channel data always produces parameters inside [0, 1]; out-of-range
/// input is clamped rather than propagated.
pub fn unit_clamp(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}
