//! Case tables, one constructor per builtin.
//!
//! Each table samples the ranges the operation's accuracy is specified
//! over, plus the representative sweep across the whole f32 number line.
//! Inputs are quantized to valid f32 encodings before acceptance intervals
//! are derived, so executors never see an unrepresentable operand.

use std::f64::consts::PI;

use cts_core::Value;
use cts_fp::builtins::{
    cos_interval, exp2_interval, exp_interval, floor_interval, fract_interval,
    inverse_sqrt_interval, ldexp_interval, negation_interval, quantize_to_f16_interval,
    round_interval, step_interval,
};
use cts_fp::constants::f32_limits;
use cts_fp::ranges::{
    biased_range, full_f32_range, full_i32_range, linear_range, FullF32RangeCounts,
    FullI32RangeCounts,
};
use cts_fp::FpInterval;
use cts_runner::{Case, Expectation};

/// Keep every `stride`-th element; used to hold binary cross-products to a
/// tractable size.
fn decimate<T: Copy>(values: &[T], stride: usize) -> Vec<T> {
    values.iter().copied().step_by(stride.max(1)).collect()
}

fn unary_table(inputs: impl IntoIterator<Item = f64>, f: impl Fn(f64) -> FpInterval) -> Vec<Case> {
    inputs.into_iter().map(|x| Case::unary_f32(x, &f)).collect()
}

/// Accuracy is only specified on [-π, π]; the full-range sweep checks that
/// nothing outside the domain is wrongly rejected.
pub fn cos_cases() -> Vec<Case> {
    let mut inputs = linear_range(-PI, PI, 1000);
    inputs.extend(full_f32_range(FullF32RangeCounts::default()));
    unary_table(inputs, cos_interval)
}

/// Dense coverage up to the overflow threshold (exp(x) exceeds f32 just
/// above x = 88), then a sparse overflowing tail.
pub fn exp_cases() -> Vec<Case> {
    let mut inputs = vec![0.0, -89.0, f32_limits::NEGATIVE_MIN];
    inputs.extend(biased_range(f32_limits::NEGATIVE_MAX, -88.0, 100));
    inputs.extend(biased_range(f32_limits::POSITIVE_MIN, 88.0, 100));
    inputs.extend(linear_range(89.0, 709.0, 10));
    unary_table(inputs, exp_interval)
}

/// exp2 analog of [`exp_cases`]: the threshold sits at the exponent limit.
pub fn exp2_cases() -> Vec<Case> {
    let mut inputs = vec![0.0, -129.0, f32_limits::NEGATIVE_MIN];
    inputs.extend(biased_range(f32_limits::NEGATIVE_MAX, -126.0, 100));
    inputs.extend(biased_range(f32_limits::POSITIVE_MIN, 127.0, 100));
    inputs.extend(linear_range(128.0, 1023.0, 10));
    unary_table(inputs, exp2_interval)
}

pub fn floor_cases() -> Vec<Case> {
    let mut inputs = vec![
        -1.5, -1.0, -0.5, -0.1, 0.0, 0.1, 0.5, 0.9, 1.0, 1.5, 1.9,
        f32_limits::SUBNORMAL_NEGATIVE_MIN,
        f32_limits::SUBNORMAL_POSITIVE_MAX,
        // Past 2^23 every f32 is an integer already.
        9007199254740992.0,
        -9007199254740992.0,
    ];
    inputs.extend(full_f32_range(FullF32RangeCounts::default()));
    unary_table(inputs, floor_interval)
}

pub fn fract_cases() -> Vec<Case> {
    let mut inputs = vec![
        -1.1, -1.0, -0.1, 0.0, 0.1, 0.5, 0.9, 1.0, 1.1, PI,
        // Integral at f32 precision, so the fractional part is exactly zero.
        123456792.0,
    ];
    inputs.extend(full_f32_range(FullF32RangeCounts::default()));
    unary_table(inputs, fract_interval)
}

/// Dense inside (0, 1] where the result is large, sparser out to 2^32.
/// Zero and negatives carry no obligations and are included to check that
/// the unbounded acceptance really accepts.
pub fn inverse_sqrt_cases() -> Vec<Case> {
    let mut inputs = vec![0.0, -1.0, f32_limits::SUBNORMAL_POSITIVE_MIN];
    inputs.extend(linear_range(f32_limits::POSITIVE_MIN, 1.0, 100));
    inputs.extend(biased_range(1.0, (1u64 << 32) as f64, 1000));
    unary_table(inputs, inverse_sqrt_interval)
}

/// Decimated cross of every f32 magnitude against every i32 exponent. The
/// second operand is an exact integer, not a float axis.
pub fn ldexp_cases() -> Vec<Case> {
    let mantissas = decimate(&full_f32_range(FullF32RangeCounts::default()), 5);
    let exponents = decimate(&full_i32_range(FullI32RangeCounts::default()), 5);

    let mut cases = Vec::with_capacity(mantissas.len() * exponents.len());
    for &x in &mantissas {
        for &e in &exponents {
            cases.push(Case::new(
                [Value::F32(x as f32), Value::I32(e)],
                Expectation::Interval(ldexp_interval(x, e)),
            ));
        }
    }
    cases
}

pub fn negation_cases() -> Vec<Case> {
    let counts = FullF32RangeCounts {
        neg_norm: 250,
        neg_sub: 20,
        pos_sub: 20,
        pos_norm: 250,
    };
    unary_table(full_f32_range(counts), negation_interval)
}

pub fn round_cases() -> Vec<Case> {
    let mut inputs = vec![
        // Ties resolve toward the even integer on both sides of zero.
        0.5, 1.5, 2.5, 3.5, -0.5, -1.5, -2.5, -3.5,
        0.1, 0.9, -0.1, -0.9, 0.0, 1.0,
    ];
    inputs.extend(full_f32_range(FullF32RangeCounts::default()));
    unary_table(inputs, round_interval)
}

/// The interval machinery reports an ambiguous step as the span [0, 1];
/// cases convert that span into the two-point union, because 0.5 is never
/// a conforming output.
pub fn step_cases() -> Vec<Case> {
    let values = decimate(&full_f32_range(FullF32RangeCounts::default()), 5);

    let mut cases = Vec::with_capacity(values.len() * values.len());
    for &edge in &values {
        for &x in &values {
            let interval = step_interval(edge, x);
            let expected = if interval.is_point() {
                Expectation::Interval(interval)
            } else {
                Expectation::any_of([FpInterval::point(0.0), FpInterval::point(1.0)])
            };
            cases.push(Case::new(
                [Value::F32(edge as f32), Value::F32(x as f32)],
                expected,
            ));
        }
    }
    cases
}

/// Covers the f16 normal range, its subnormal band (where flushing to zero
/// is additionally conformant), and f32 values past the f16 finite range.
pub fn quantize_to_f16_cases() -> Vec<Case> {
    const F16_MAX: f64 = 65504.0;
    const F16_MIN_NORMAL: f64 = 6.103515625e-5;

    let mut inputs = linear_range(-F16_MAX, F16_MAX, 200);
    inputs.extend(linear_range(-F16_MIN_NORMAL, F16_MIN_NORMAL, 100));
    inputs.extend(full_f32_range(FullF32RangeCounts::default()));
    unary_table(inputs, quantize_to_f16_interval)
}
