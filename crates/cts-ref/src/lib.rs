//! Host-side reference executor.
//!
//! Evaluates the builtin operations with the host's f32 arithmetic, one
//! output per input set, ignoring the program's delivery configuration
//! (operand source and vector width change nothing about scalar math).
//! The host libm is close enough to correctly rounded that every output
//! lands inside the acceptance intervals the framework derives, which
//! makes this executor suitable both for testing the runner itself and
//! as the default target of the command-line driver.

use cts_core::{CtsError, Result, ScalarType, Value};
use cts_runner::{BuiltinOp, CaseInputs, Executor, Program};
use tracing::trace;

/// Reference executor backed by host arithmetic.
///
/// The f16 capability is modelled explicitly so the skip path of the
/// runner can be exercised: an executor built with [`without_f16`]
/// rejects `quantizeToF16` programs with `Unsupported`.
///
/// [`without_f16`]: RefExecutor::without_f16
#[derive(Clone, Copy, Debug)]
pub struct RefExecutor {
    f16_supported: bool,
}

impl RefExecutor {
    pub fn new() -> Self {
        Self {
            f16_supported: true,
        }
    }

    /// An executor lacking the f16 capability.
    pub fn without_f16() -> Self {
        Self {
            f16_supported: false,
        }
    }

    fn eval(&self, op: BuiltinOp, inputs: &CaseInputs) -> Result<Value> {
        let operands = typed_operands(op, inputs)?;
        let out = match (op, operands.as_slice()) {
            (BuiltinOp::Cos, [Operand::F32(x)]) => x.cos(),
            (BuiltinOp::Exp, [Operand::F32(x)]) => x.exp(),
            (BuiltinOp::Exp2, [Operand::F32(x)]) => x.exp2(),
            (BuiltinOp::Floor, [Operand::F32(x)]) => x.floor(),
            (BuiltinOp::Fract, [Operand::F32(x)]) => x - x.floor(),
            (BuiltinOp::InverseSqrt, [Operand::F32(x)]) => 1.0 / x.sqrt(),
            (BuiltinOp::Ldexp, [Operand::F32(x), Operand::I32(e)]) => {
                (f64::from(*x) * f64::powi(2.0, *e)) as f32
            }
            (BuiltinOp::Negation, [Operand::F32(x)]) => -x,
            (BuiltinOp::Round, [Operand::F32(x)]) => x.round_ties_even(),
            (BuiltinOp::Step, [Operand::F32(edge), Operand::F32(x)]) => {
                if x >= edge {
                    1.0
                } else {
                    0.0
                }
            }
            (BuiltinOp::QuantizeToF16, [Operand::F32(x)]) => {
                half::f16::from_f32(*x).to_f32()
            }
            _ => {
                return Err(CtsError::Execution(format!(
                    "{op} got {} operands, needs {}",
                    operands.len(),
                    op.arity()
                )))
            }
        };
        Ok(Value::F32(out))
    }
}

impl Default for RefExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for RefExecutor {
    fn execute(&self, program: &Program, inputs: &[CaseInputs]) -> Result<Vec<Value>> {
        if program.op == BuiltinOp::QuantizeToF16 && !self.f16_supported {
            return Err(CtsError::Unsupported(String::from(
                "f16 conversions not available",
            )));
        }
        trace!(program = %program.key(), batch = inputs.len(), "dispatch");
        inputs
            .iter()
            .map(|case| self.eval(program.op, case))
            .collect()
    }
}

enum Operand {
    F32(f32),
    I32(i32),
}

/// Check each operand against the operation's positional types.
fn typed_operands(op: BuiltinOp, inputs: &CaseInputs) -> Result<Vec<Operand>> {
    let types = op.input_types();
    if inputs.len() != types.len() {
        return Err(CtsError::Execution(format!(
            "{op} got {} operands, needs {}",
            inputs.len(),
            types.len()
        )));
    }
    inputs
        .iter()
        .zip(types)
        .map(|(value, expected)| match (value, expected) {
            (Value::F32(v), ScalarType::F32) => Ok(Operand::F32(*v)),
            (Value::I32(v), ScalarType::I32) => Ok(Operand::I32(*v)),
            _ => Err(CtsError::TypeMismatch {
                expected: *expected,
                got: value.scalar_type(),
            }),
        })
        .collect()
}
