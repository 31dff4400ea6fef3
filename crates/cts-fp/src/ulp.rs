//! ULP and directed-rounding helpers for f32, computed over f64 inputs.

use crate::constants::f32_limits;

/// Next f32 strictly above `x` (both zeros step to the smallest positive
/// subnormal; the largest finite value steps to +∞; NaN and +∞ are returned
/// unchanged).
pub fn next_up_f32(x: f32) -> f32 {
    if x.is_nan() || x == f32::INFINITY {
        return x;
    }
    if x == 0.0 {
        return f32::from_bits(1);
    }
    let bits = x.to_bits();
    if x > 0.0 {
        f32::from_bits(bits + 1)
    } else {
        f32::from_bits(bits - 1)
    }
}

/// Next f32 strictly below `x`. Mirror of [`next_up_f32`].
pub fn next_down_f32(x: f32) -> f32 {
    -next_up_f32(-x)
}

/// Smallest f32 value >= `x`, widened back to f64. Values above the f32
/// range quantize to +∞; values below it quantize to the most negative
/// finite f32.
pub fn quantize_up(x: f64) -> f64 {
    if x.is_nan() || x.is_infinite() {
        return x;
    }
    // `as f32` rounds to nearest; correct the direction if it rounded down.
    let q = x as f32;
    let q = if (q as f64) >= x { q } else { next_up_f32(q) };
    q as f64
}

/// Largest f32 value <= `x`, widened back to f64. Mirror of [`quantize_up`].
pub fn quantize_down(x: f64) -> f64 {
    -quantize_up(-x)
}

/// The gap between adjacent f32 values at the magnitude of `x`.
///
/// When `x` falls between two representables, this is the width of that gap.
/// When `x` is itself representable, the larger of the gaps on either side
/// is used, so widening by one ULP never under-covers across a binade
/// boundary. Magnitudes at or beyond the finite range use the gap below
/// `f32::MAX`. Never smaller than the smallest subnormal.
pub fn one_ulp_f32(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    let mag = x.abs();
    if mag >= f32_limits::POSITIVE_MAX {
        return f32_limits::POSITIVE_MAX - next_down_f32(f32::MAX) as f64;
    }

    let below = quantize_down(mag);
    let above = quantize_up(mag);
    if below == above {
        // Representable: take the max of the two adjacent gaps.
        let v = below as f32;
        let up = next_up_f32(v) as f64 - below;
        let down = below - next_down_f32(v) as f64;
        up.max(down)
    } else {
        above - below
    }
}
