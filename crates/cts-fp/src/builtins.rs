//! Acceptance intervals for the builtin operations under test.
//!
//! Each function takes exact inputs (already quantized to valid f32
//! encodings by the caller) and returns the interval of results a
//! conforming implementation may produce. Error bounds follow the WGSL
//! accuracy table; domain policy is named per function rather than handled
//! generically.
//!
//! Subnormal inputs are evaluated both as-is and flushed to zero, and the
//! per-candidate intervals are hulled, so an implementation flushing on
//! input is as conformant as one that does not.

use std::f64::consts::PI;

use crate::constants::is_f32_subnormal;
use crate::interval::FpInterval;

/// cos is only specified to 2^-11 absolute error, and only on [-π, π].
const COS_ABS_ERROR: f64 = 4.8828125e-4;

/// Flush candidate set for one operand: the value itself, plus zero when the
/// value is subnormal.
fn flush_candidates(x: f64) -> impl Iterator<Item = f64> {
    let flushed = if is_f32_subnormal(x) {
        Some(0.0f64.copysign(x))
    } else {
        None
    };
    std::iter::once(x).chain(flushed)
}

/// Hull of `op` over the flush candidates of a unary operand.
fn run_unary(x: f64, op: impl Fn(f64) -> FpInterval) -> FpInterval {
    flush_candidates(x)
        .map(op)
        .reduce(FpInterval::hull)
        .expect("candidate set is never empty")
}

/// Hull of `op` over the flush candidates of both operands of a binary
/// operation.
fn run_binary(a: f64, b: f64, op: impl Fn(f64, f64) -> FpInterval) -> FpInterval {
    let mut result: Option<FpInterval> = None;
    for ca in flush_candidates(a) {
        for cb in flush_candidates(b) {
            let i = op(ca, cb);
            result = Some(match result {
                Some(r) => FpInterval::hull(r, i),
                None => i,
            });
        }
    }
    result.expect("candidate set is never empty")
}

/// Apply a pointwise acceptance function across an interval input and hull
/// the endpoint images.
///
/// Sound only for operations that are monotonic across the span; callers
/// with non-monotonic operations must split at interior extrema first.
pub fn run_on_interval(input: FpInterval, op: impl Fn(f64) -> FpInterval) -> FpInterval {
    FpInterval::hull(op(input.lo()), op(input.hi()))
}

/// `cos(x)`: 2^-11 absolute error inside [-π, π]; no obligations outside.
pub fn cos_interval(x: f64) -> FpInterval {
    run_unary(x, |x| {
        if (-PI..=PI).contains(&x) {
            FpInterval::absolute_error(x.cos(), COS_ABS_ERROR)
        } else {
            FpInterval::unbounded()
        }
    })
}

/// `exp(x)`: 3 + 2·|x| ULP. Results past the f32 range are open-ended
/// toward +∞ (overflow acceptance), never an error.
pub fn exp_interval(x: f64) -> FpInterval {
    run_unary(x, |x| FpInterval::ulp(x.exp(), 3.0 + 2.0 * x.abs()))
}

/// `exp2(x)`: 3 + 2·|x| ULP, same overflow policy as [`exp_interval`].
pub fn exp2_interval(x: f64) -> FpInterval {
    run_unary(x, |x| FpInterval::ulp(x.exp2(), 3.0 + 2.0 * x.abs()))
}

/// `floor(x)`: correctly rounded.
pub fn floor_interval(x: f64) -> FpInterval {
    run_unary(x, |x| FpInterval::correctly_rounded(x.floor()))
}

/// `fract(x)` = x - floor(x), propagated through the floor acceptance: the
/// result interval is the hull of the correctly rounded subtraction against
/// each end of the floor interval.
pub fn fract_interval(x: f64) -> FpInterval {
    run_unary(x, |x| {
        let floor = floor_interval(x);
        run_on_interval(floor, |fl| FpInterval::correctly_rounded(x - fl))
    })
}

/// `inverseSqrt(x)`: 2 ULP for x > 0. At and below zero the mathematical
/// result is undefined or infinite, so the acceptance is unbounded rather
/// than clamped or an error.
pub fn inverse_sqrt_interval(x: f64) -> FpInterval {
    run_unary(x, |x| {
        if x <= 0.0 {
            FpInterval::unbounded()
        } else {
            FpInterval::ulp(1.0 / x.sqrt(), 2.0)
        }
    })
}

/// `ldexp(e1, e2)` = e1 × 2^e2, correctly rounded.
///
/// The exponent is an exact i32 and carries no rounding uncertainty; only
/// the mantissa operand participates in flush candidates. Exact power-of-two
/// scaling of a representable mantissa yields a point interval.
pub fn ldexp_interval(e1: f64, e2: i32) -> FpInterval {
    run_unary(e1, |e1| {
        let product = e1 * f64::from(e2).exp2();
        if product.is_nan() {
            // 0 × 2^huge: the scale already overflowed to infinity and the
            // product is indeterminate, so there are no obligations.
            FpInterval::unbounded()
        } else {
            FpInterval::correctly_rounded(product)
        }
    })
}

/// Unary `-x`: correctly rounded (exact for every representable input).
pub fn negation_interval(x: f64) -> FpInterval {
    run_unary(x, |x| FpInterval::correctly_rounded(-x))
}

/// `round(x)` with round-half-to-even: a tie between k and k+1 accepts only
/// the even neighbor — a point interval, never the span [k, k+1].
pub fn round_interval(x: f64) -> FpInterval {
    run_unary(x, |x| FpInterval::correctly_rounded(x.round_ties_even()))
}

/// `step(edge, x)`: 1.0 when edge < x, 0.0 when edge > x.
///
/// The result is [1,1] or [0,0] when every flush candidate pair agrees on
/// a strict ordering. When the operands are within rounding distance of
/// equality — equal candidates, or flushing that flips the comparison —
/// either output is conformant and the span [0, 1] is returned; callers
/// must interpret that span as "either endpoint, nothing in between" and
/// convert it to a two-interval union.
pub fn step_interval(edge: f64, x: f64) -> FpInterval {
    run_binary(edge, x, |edge, x| {
        if edge == x {
            FpInterval::new(0.0, 1.0)
        } else if edge < x {
            FpInterval::point(1.0)
        } else {
            FpInterval::point(0.0)
        }
    })
}

/// `quantizeToF16(x)`: x converted to binary16 and back, correctly rounded.
/// Values in f16's subnormal range may additionally flush to zero; values
/// beyond its finite range are open-ended toward the overflowing side.
pub fn quantize_to_f16_interval(x: f64) -> FpInterval {
    const F16_MIN_NORMAL: f64 = 6.103515625e-5;
    run_unary(x, |x| {
        let q = half::f16::from_f64(x).to_f64();
        if q.is_infinite() {
            return FpInterval::correctly_rounded(q);
        }
        let base = FpInterval::correctly_rounded(q);
        if q != 0.0 && q.abs() < F16_MIN_NORMAL {
            FpInterval::hull(base, FpInterval::point(0.0))
        } else {
            base
        }
    })
}
