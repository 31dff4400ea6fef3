//! Concrete test cases and their acceptance criteria.

use cts_core::Value;
use cts_fp::ranges::quantize_to_f32;
use cts_fp::FpInterval;
use smallvec::{smallvec, SmallVec};

/// What a case accepts as a conforming output.
#[derive(Clone, Debug)]
pub enum Expectation {
    /// The output must lie inside a single closed interval.
    Interval(FpInterval),
    /// Union acceptance: the output must lie inside at least one member.
    /// Used where rounding legitimately permits two disjoint results (e.g.
    /// `step` with edge and x within rounding distance of equality).
    AnyOf(SmallVec<[FpInterval; 2]>),
    /// Bitwise/exact equality, for non-floating results.
    Exact(Value),
}

impl Expectation {
    pub fn any_of(intervals: impl IntoIterator<Item = FpInterval>) -> Self {
        let members: SmallVec<[FpInterval; 2]> = intervals.into_iter().collect();
        assert!(!members.is_empty(), "empty acceptance union");
        Expectation::AnyOf(members)
    }

    /// Judge one output. `Err` carries the mismatch description used in
    /// failure reports.
    pub fn check(&self, actual: &Value) -> Result<(), String> {
        match self {
            Expectation::Interval(interval) => {
                let v = float_output(actual)?;
                if interval.contains(v) {
                    Ok(())
                } else {
                    Err(format!("{actual} is outside {interval}"))
                }
            }
            Expectation::AnyOf(members) => {
                let v = float_output(actual)?;
                if members.iter().any(|m| m.contains(v)) {
                    Ok(())
                } else {
                    let rendered: Vec<String> =
                        members.iter().map(|m| m.to_string()).collect();
                    Err(format!(
                        "{actual} is outside every member of anyOf({})",
                        rendered.join(", ")
                    ))
                }
            }
            Expectation::Exact(expected) => {
                if actual == expected {
                    Ok(())
                } else {
                    Err(format!("got {actual}, expected exactly {expected}"))
                }
            }
        }
    }
}

fn float_output(actual: &Value) -> Result<f64, String> {
    actual
        .as_f32()
        .map(|v| v as f64)
        .ok_or_else(|| format!("expected an f32 output, got {actual}"))
}

/// One concrete (inputs, acceptance) pair. Produced once by a generator,
/// consumed read-only by the runner.
#[derive(Clone, Debug)]
pub struct Case {
    pub inputs: SmallVec<[Value; 2]>,
    pub expected: Expectation,
}

impl Case {
    pub fn new(inputs: impl IntoIterator<Item = Value>, expected: Expectation) -> Self {
        Self {
            inputs: inputs.into_iter().collect(),
            expected,
        }
    }

    /// Quantize one input to a valid f32 encoding and derive its acceptance
    /// interval from `interval_fn`.
    pub fn unary_f32(x: f64, interval_fn: impl Fn(f64) -> FpInterval) -> Self {
        let x = quantize_to_f32(x);
        Self {
            inputs: smallvec![Value::F32(x as f32)],
            expected: Expectation::Interval(interval_fn(x)),
        }
    }

    /// Binary equivalent of [`Case::unary_f32`].
    pub fn binary_f32(a: f64, b: f64, interval_fn: impl Fn(f64, f64) -> FpInterval) -> Self {
        let a = quantize_to_f32(a);
        let b = quantize_to_f32(b);
        Self {
            inputs: smallvec![Value::F32(a as f32), Value::F32(b as f32)],
            expected: Expectation::Interval(interval_fn(a, b)),
        }
    }

    /// Render the inputs for failure diagnostics.
    pub fn describe_inputs(&self) -> String {
        let rendered: Vec<String> = self.inputs.iter().map(|v| v.to_string()).collect();
        format!("({})", rendered.join(", "))
    }
}
