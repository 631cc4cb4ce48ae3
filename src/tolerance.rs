// src/tolerance.rs

use glam::DVec2;

/// Absolute threshold below which two coordinates are considered equal.
pub const EPSILON: f64 = 0.00001;

#[inline(always)]
pub fn real_close(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

#[inline(always)]
pub fn real_close_point(p: DVec2, q: DVec2) -> bool {
    real_close(p.x, q.x) && real_close(p.y, q.y)
}

/// True when `value` lies between `a` and `b` (in either order), with the
/// range padded by `EPSILON` on both sides.
pub fn within(value: f64, a: f64, b: f64) -> bool {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    lo - EPSILON <= value && value <= hi + EPSILON
}
