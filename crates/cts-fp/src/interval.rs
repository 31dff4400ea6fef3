//! Closed acceptance intervals over the extended reals.

use crate::constants::{f32_limits, is_f32_subnormal};
use crate::ulp::{one_ulp_f32, quantize_down, quantize_up};

/// A closed range `[lo, hi]` of acceptable f32 results, with endpoints held
/// in f64 and ±∞ permitted.
///
/// Intervals are pure values: constructed once, never mutated. `lo <= hi`
/// is an invariant checked at construction; violating it is a programming
/// error, not a data error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FpInterval {
    lo: f64,
    hi: f64,
}

impl FpInterval {
    /// Build an interval from explicit endpoints.
    ///
    /// Panics on NaN endpoints or `lo > hi`.
    pub fn new(lo: f64, hi: f64) -> Self {
        assert!(!lo.is_nan() && !hi.is_nan(), "interval endpoint is NaN");
        assert!(lo <= hi, "inverted interval: [{lo}, {hi}]");
        Self { lo, hi }
    }

    /// The degenerate interval containing exactly one value.
    pub fn point(v: f64) -> Self {
        Self::new(v, v)
    }

    /// The interval accepting any result whatsoever, including NaN and
    /// either infinity. Used where the operation's domain gives the
    /// implementation no obligations.
    pub fn unbounded() -> Self {
        Self::new(f64::NEG_INFINITY, f64::INFINITY)
    }

    pub fn lo(&self) -> f64 {
        self.lo
    }

    pub fn hi(&self) -> f64 {
        self.hi
    }

    pub fn is_point(&self) -> bool {
        self.lo == self.hi
    }

    pub fn is_finite(&self) -> bool {
        self.lo.is_finite() && self.hi.is_finite()
    }

    /// Containment check used by the comparator.
    ///
    /// NaN is accepted only by the fully unbounded interval: a half-bounded
    /// interval still constrains the result's finite side, but an operation
    /// with no obligations at all may produce anything.
    pub fn contains(&self, v: f64) -> bool {
        if self.lo == f64::NEG_INFINITY && self.hi == f64::INFINITY {
            return true;
        }
        if v.is_nan() {
            return false;
        }
        self.lo <= v && v <= self.hi
    }

    /// Smallest interval containing both operands.
    pub fn hull(a: Self, b: Self) -> Self {
        Self::new(a.lo.min(b.lo), a.hi.max(b.hi))
    }

    /// Extend the interval to admit flushed outputs: if an endpoint lies in
    /// the subnormal range, an implementation may produce zero instead, so
    /// zero joins the acceptance.
    fn with_flushed_outputs(self) -> Self {
        let mut lo = self.lo;
        let mut hi = self.hi;
        if is_f32_subnormal(lo) {
            lo = lo.min(0.0);
        }
        if is_f32_subnormal(hi) {
            hi = hi.max(0.0);
        }
        Self::new(lo, hi)
    }

    /// Acceptance for a correctly rounded operation at exact result `n`.
    ///
    /// Representable results yield a point interval; otherwise the two
    /// surrounding representables. Results beyond the finite f32 range are
    /// open-ended toward the overflowing side (rounding may saturate at the
    /// largest finite value or produce the infinity).
    pub fn correctly_rounded(n: f64) -> Self {
        assert!(!n.is_nan(), "correctly_rounded of NaN");
        if n > f32_limits::POSITIVE_MAX {
            return Self::new(f32_limits::POSITIVE_MAX, f64::INFINITY);
        }
        if n < f32_limits::NEGATIVE_MIN {
            return Self::new(f64::NEG_INFINITY, f32_limits::NEGATIVE_MIN);
        }
        Self::new(quantize_down(n), quantize_up(n)).with_flushed_outputs()
    }

    /// Acceptance within `count` ULPs of the exact result `n`, endpoints
    /// rounded outward to representables.
    pub fn ulp(n: f64, count: f64) -> Self {
        assert!(!n.is_nan(), "ulp interval of NaN");
        assert!(count >= 0.0, "negative ULP count: {count}");
        if n.is_infinite() {
            return Self::correctly_rounded(n);
        }
        let u = one_ulp_f32(n);
        Self::new(quantize_down(n - count * u), quantize_up(n + count * u))
            .with_flushed_outputs()
    }

    /// Acceptance within an absolute error of `err` around the exact result
    /// `n`, endpoints rounded outward to representables.
    pub fn absolute_error(n: f64, err: f64) -> Self {
        assert!(!n.is_nan(), "absolute error interval of NaN");
        assert!(err >= 0.0, "negative error bound: {err}");
        if n.is_infinite() {
            return Self::correctly_rounded(n);
        }
        Self::new(quantize_down(n - err), quantize_up(n + err)).with_flushed_outputs()
    }
}

impl std::fmt::Display for FpInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_point() {
            write!(f, "[{:?}]", self.lo)
        } else {
            write!(f, "[{:?}, {:?}]", self.lo, self.hi)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "inverted interval")]
    fn test_inverted_bounds_panic() {
        let _ = FpInterval::new(1.0, 0.0);
    }

    #[test]
    fn test_contains_endpoints_inclusive() {
        let i = FpInterval::new(-1.0, 2.0);
        assert!(i.contains(-1.0));
        assert!(i.contains(2.0));
        assert!(i.contains(0.0));
        assert!(!i.contains(2.0000001));
        assert!(!i.contains(f64::NAN));
    }

    #[test]
    fn test_unbounded_accepts_everything() {
        let any = FpInterval::unbounded();
        assert!(any.contains(f64::NAN));
        assert!(any.contains(f64::INFINITY));
        assert!(any.contains(-0.0));
    }

    #[test]
    fn test_half_bounded_rejects_nan() {
        let i = FpInterval::new(f32_limits::POSITIVE_MAX, f64::INFINITY);
        assert!(i.contains(f64::INFINITY));
        assert!(i.contains(f32_limits::POSITIVE_MAX));
        assert!(!i.contains(f64::NAN));
        assert!(!i.contains(0.0));
    }

    #[test]
    fn test_correctly_rounded_point_for_representable() {
        let i = FpInterval::correctly_rounded(1.5);
        assert!(i.is_point());
        assert_eq!(i.lo(), 1.5);
    }

    #[test]
    fn test_correctly_rounded_straddles_unrepresentable() {
        let i = FpInterval::correctly_rounded(0.1);
        assert!(!i.is_point());
        assert!(i.contains(0.1f32 as f64));
        assert_eq!(i.hi() - i.lo(), one_ulp_f32(0.1));
    }

    #[test]
    fn test_correctly_rounded_overflow_is_open_ended() {
        let i = FpInterval::correctly_rounded(1e39);
        assert_eq!(i.lo(), f32_limits::POSITIVE_MAX);
        assert_eq!(i.hi(), f64::INFINITY);
        assert!(i.contains(f64::INFINITY));
    }

    #[test]
    fn test_subnormal_acceptance_admits_zero() {
        // A result in the subnormal range may legally flush to zero.
        let i = FpInterval::correctly_rounded(1e-40);
        assert!(i.contains(0.0));
        assert!(i.contains(1e-40f32 as f64));
    }

    #[test]
    fn test_ulp_interval_widens_both_sides() {
        let i = FpInterval::ulp(1.0, 2.0);
        let u = one_ulp_f32(1.0);
        assert!(i.lo() <= 1.0 - 2.0 * u);
        assert!(i.hi() >= 1.0 + 2.0 * u);
        assert!(i.contains(1.0));
    }

    #[test]
    fn test_zero_ulp_is_outward_rounding_only() {
        let i = FpInterval::ulp(1.5, 0.0);
        assert!(i.is_point());
    }

    #[test]
    fn test_hull() {
        let h = FpInterval::hull(FpInterval::point(0.0), FpInterval::point(1.0));
        assert_eq!(h, FpInterval::new(0.0, 1.0));
    }
}
