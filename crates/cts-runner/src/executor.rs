//! The execution collaborator interface.
//!
//! The runner treats the device as an opaque engine behind [`Executor`]:
//! hand it a program and a batch of bound inputs, get back one output per
//! input in the same order. Everything device-specific (compilation,
//! dispatch, readback) lives behind the trait.

use cts_core::{Result, ScalarType, Value};
use serde::Serialize;
use smallvec::SmallVec;

use crate::wgsl;

/// How operands reach the expression under test. The same acceptance holds
/// regardless of delivery mode; this is an orthogonal test axis, never a
/// comparator concern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum InputSource {
    /// Operands baked into the program text as constants.
    Const,
    /// Operands read from a uniform buffer.
    Uniform,
    /// Operands read from a read-only storage buffer.
    StorageRead,
    /// Operands read from a read-write storage buffer.
    StorageReadWrite,
}

impl InputSource {
    pub const ALL: [InputSource; 4] = [
        InputSource::Const,
        InputSource::Uniform,
        InputSource::StorageRead,
        InputSource::StorageReadWrite,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InputSource::Const => "const",
            InputSource::Uniform => "uniform",
            InputSource::StorageRead => "storage_r",
            InputSource::StorageReadWrite => "storage_rw",
        }
    }

    pub fn from_label(label: &str) -> Option<InputSource> {
        Self::ALL.iter().copied().find(|s| s.label() == label)
    }
}

impl std::fmt::Display for InputSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The builtin operations under test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuiltinOp {
    Cos,
    Exp,
    Exp2,
    Floor,
    Fract,
    InverseSqrt,
    Ldexp,
    Negation,
    Round,
    Step,
    QuantizeToF16,
}

impl BuiltinOp {
    pub fn name(&self) -> &'static str {
        match self {
            BuiltinOp::Cos => "cos",
            BuiltinOp::Exp => "exp",
            BuiltinOp::Exp2 => "exp2",
            BuiltinOp::Floor => "floor",
            BuiltinOp::Fract => "fract",
            BuiltinOp::InverseSqrt => "inverseSqrt",
            BuiltinOp::Ldexp => "ldexp",
            BuiltinOp::Negation => "negation",
            BuiltinOp::Round => "round",
            BuiltinOp::Step => "step",
            BuiltinOp::QuantizeToF16 => "quantizeToF16",
        }
    }

    pub fn arity(&self) -> usize {
        match self {
            BuiltinOp::Ldexp | BuiltinOp::Step => 2,
            _ => 1,
        }
    }

    /// Operand types in positional order.
    pub fn input_types(&self) -> &'static [ScalarType] {
        match self {
            BuiltinOp::Ldexp => &[ScalarType::F32, ScalarType::I32],
            BuiltinOp::Step => &[ScalarType::F32, ScalarType::F32],
            _ => &[ScalarType::F32],
        }
    }

    /// Negation is spelled as a unary operator, the rest as function calls.
    pub fn is_operator(&self) -> bool {
        matches!(self, BuiltinOp::Negation)
    }
}

impl std::fmt::Display for BuiltinOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One program handed to the executor: the operation, its delivery
/// configuration, and the rendered shader source the collaborator may
/// compile.
#[derive(Clone, Debug)]
pub struct Program {
    pub op: BuiltinOp,
    pub input_source: InputSource,
    /// `None` for scalar evaluation; `Some(w)` packs operands into
    /// `vecW<f32>` lanes. Each lane is still judged independently.
    pub vectorize: Option<u32>,
    pub source: String,
}

impl Program {
    pub fn new(op: BuiltinOp, input_source: InputSource, vectorize: Option<u32>) -> Self {
        if let Some(w) = vectorize {
            assert!((2..=4).contains(&w), "vector width {w} out of range");
        }
        let source = wgsl::render_expression_shader(op, input_source, vectorize);
        Self {
            op,
            input_source,
            vectorize,
            source,
        }
    }

    /// Stable configuration key used as the prefix of case ids.
    pub fn key(&self) -> String {
        match self.vectorize {
            Some(w) => format!("{}/{}/vec{}", self.op, self.input_source, w),
            None => format!("{}/{}/scalar", self.op, self.input_source),
        }
    }
}

/// The operands of one invocation.
pub type CaseInputs = SmallVec<[Value; 2]>;

/// Opaque execution collaborator.
///
/// `execute` returns exactly one output per element of `inputs`, in the
/// same order — outputs are attributed to cases positionally, so an
/// implementation must never reorder across its internal asynchrony.
/// Returning `CtsError::Unsupported` reports every case in the dispatch as
/// skipped rather than failed.
pub trait Executor: Send + Sync {
    fn execute(&self, program: &Program, inputs: &[CaseInputs]) -> Result<Vec<Value>>;
}
