//! Floating-point acceptance machinery for conformance testing.
//!
//! Given an exact (f64) input and a builtin operation, this crate computes
//! the closed interval of f32 values a conforming implementation is allowed
//! to produce, accounting for the operation's mandated error bound (ULPs,
//! absolute error, or correct rounding), subnormal flush-to-zero, and the
//! representational limits of f32. It also provides the deterministic range
//! generators that produce representative test inputs.
//!
//! All of this is pure computation: no I/O, no state, no runtime failure
//! modes. Malformed use (NaN where a precondition forbids it, inverted
//! bounds) is a programming error and panics.

pub mod builtins;
pub mod constants;
pub mod interval;
pub mod ranges;
pub mod ulp;

pub use interval::FpInterval;
