//! Boundary values of the f32 format, as exact f64 constants.
//!
//! Interval computation happens in f64 with these as the shared ground
//! truth for where normals end, subnormals begin, and overflow starts.

/// f32 boundary values. Naming follows number-line order: `NEGATIVE_MIN` is
/// the most negative finite value, `NEGATIVE_MAX` the negative value closest
/// to zero.
pub mod f32_limits {
    /// Largest finite f32.
    pub const POSITIVE_MAX: f64 = 3.4028234663852886e38;
    /// Smallest positive normal f32.
    pub const POSITIVE_MIN: f64 = 1.1754943508222875e-38;
    /// Most negative finite f32.
    pub const NEGATIVE_MIN: f64 = -POSITIVE_MAX;
    /// Negative normal f32 closest to zero.
    pub const NEGATIVE_MAX: f64 = -POSITIVE_MIN;

    /// Smallest positive subnormal f32 (bit pattern 0x00000001).
    pub const SUBNORMAL_POSITIVE_MIN: f64 = 1.401298464324817e-45;
    /// Largest positive subnormal f32 (bit pattern 0x007fffff).
    pub const SUBNORMAL_POSITIVE_MAX: f64 = 1.1754942106924411e-38;
    /// Most negative subnormal f32.
    pub const SUBNORMAL_NEGATIVE_MIN: f64 = -SUBNORMAL_POSITIVE_MAX;
    /// Negative subnormal f32 closest to zero.
    pub const SUBNORMAL_NEGATIVE_MAX: f64 = -SUBNORMAL_POSITIVE_MIN;
}

/// i32 boundary values.
pub mod i32_limits {
    pub const POSITIVE_MAX: f64 = i32::MAX as f64;
    pub const NEGATIVE_MIN: f64 = i32::MIN as f64;
}

/// True when `x` lands in the subnormal range of f32 (zero excluded).
///
/// Implementations may flush such values to zero, so acceptance intervals
/// touching this range must also admit zero, and subnormal inputs must be
/// evaluated both as-is and flushed.
pub fn is_f32_subnormal(x: f64) -> bool {
    x != 0.0 && x.abs() < f32_limits::POSITIVE_MIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits_match_f32() {
        assert_eq!(f32_limits::POSITIVE_MAX, f32::MAX as f64);
        assert_eq!(f32_limits::POSITIVE_MIN, f32::MIN_POSITIVE as f64);
        assert_eq!(f32_limits::SUBNORMAL_POSITIVE_MIN, f32::from_bits(1) as f64);
        assert_eq!(
            f32_limits::SUBNORMAL_POSITIVE_MAX,
            f32::from_bits(0x007f_ffff) as f64
        );
    }

    #[test]
    fn test_subnormal_classification() {
        assert!(is_f32_subnormal(1e-40));
        assert!(is_f32_subnormal(-1e-40));
        assert!(!is_f32_subnormal(0.0));
        assert!(!is_f32_subnormal(f32_limits::POSITIVE_MIN));
        assert!(!is_f32_subnormal(1.0));
    }
}
