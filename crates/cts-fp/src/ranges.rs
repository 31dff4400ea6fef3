//! Deterministic input range generators.
//!
//! Every generator is a pure function of its arguments: re-running with the
//! same definition reproduces the same sequence, which keeps failing case
//! ids stable across runs. Floating-point outputs are quantized to valid
//! f32 encodings so the system under test never receives an
//! unrepresentable input.

use crate::constants::{f32_limits, i32_limits};

/// `count` evenly spaced samples over `[start, end]`, both ends included.
/// A count of one yields just `start`.
pub fn linear_range(start: f64, end: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if count == 1 {
        return vec![start];
    }
    let step = (end - start) / (count - 1) as f64;
    (0..count).map(|i| start + step * i as f64).collect()
}

/// `count` samples over `[start, end]`, quadratically denser near `start`.
///
/// Used where behavior changes sharply near one boundary, e.g. sampling up
/// to an overflow threshold.
pub fn biased_range(start: f64, end: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if count == 1 {
        return vec![start];
    }
    (0..count)
        .map(|i| {
            let t = i as f64 / (count - 1) as f64;
            start + t * t * (end - start)
        })
        .collect()
}

/// Per-bucket sample counts for [`full_f32_range`].
#[derive(Clone, Copy, Debug)]
pub struct FullF32RangeCounts {
    pub neg_norm: usize,
    pub neg_sub: usize,
    pub pos_sub: usize,
    pub pos_norm: usize,
}

impl Default for FullF32RangeCounts {
    fn default() -> Self {
        Self {
            neg_norm: 50,
            neg_sub: 10,
            pos_sub: 10,
            pos_norm: 50,
        }
    }
}

/// Representative samples across the whole f32 number line: negative
/// normals (biased toward the extreme), negative subnormals, zero, positive
/// subnormals, positive normals. Every value is quantized to f32.
pub fn full_f32_range(counts: FullF32RangeCounts) -> Vec<f64> {
    let mut out = Vec::with_capacity(
        counts.neg_norm + counts.neg_sub + 1 + counts.pos_sub + counts.pos_norm,
    );
    out.extend(biased_range(
        f32_limits::NEGATIVE_MIN,
        f32_limits::NEGATIVE_MAX,
        counts.neg_norm,
    ));
    out.extend(linear_range(
        f32_limits::SUBNORMAL_NEGATIVE_MIN,
        f32_limits::SUBNORMAL_NEGATIVE_MAX,
        counts.neg_sub,
    ));
    out.push(0.0);
    out.extend(linear_range(
        f32_limits::SUBNORMAL_POSITIVE_MIN,
        f32_limits::SUBNORMAL_POSITIVE_MAX,
        counts.pos_sub,
    ));
    out.extend(biased_range(
        f32_limits::POSITIVE_MIN,
        f32_limits::POSITIVE_MAX,
        counts.pos_norm,
    ));
    out.into_iter().map(quantize_to_f32).collect()
}

/// Per-bucket sample counts for [`full_i32_range`].
#[derive(Clone, Copy, Debug)]
pub struct FullI32RangeCounts {
    pub negative: usize,
    pub positive: usize,
}

impl Default for FullI32RangeCounts {
    fn default() -> Self {
        Self {
            negative: 50,
            positive: 50,
        }
    }
}

/// Representative i32 samples: negatives biased toward the extreme, zero,
/// positives biased toward 1.
pub fn full_i32_range(counts: FullI32RangeCounts) -> Vec<i32> {
    let mut out = Vec::with_capacity(counts.negative + 1 + counts.positive);
    out.extend(
        biased_range(i32_limits::NEGATIVE_MIN, -1.0, counts.negative)
            .into_iter()
            .map(quantize_to_i32),
    );
    out.push(0);
    out.extend(
        biased_range(1.0, i32_limits::POSITIVE_MAX, counts.positive)
            .into_iter()
            .map(quantize_to_i32),
    );
    out
}

/// Round to the nearest representable f32, widened back to f64.
pub fn quantize_to_f32(x: f64) -> f64 {
    x as f32 as f64
}

/// Truncate toward zero to an i32, saturating at the type bounds.
pub fn quantize_to_i32(x: f64) -> i32 {
    x.trunc().clamp(i32_limits::NEGATIVE_MIN, i32_limits::POSITIVE_MAX) as i32
}

/// Round-trip through binary16: the quantization the `quantizeToF16`
/// builtin is specified against.
pub fn quantize_to_f16(x: f32) -> f32 {
    half::f16::from_f32(x).to_f32()
}
