//! Shared types for the conformance test framework.
//!
//! `cts-core` provides the error taxonomy and the typed scalar values that
//! flow between case generation, the execution collaborator, and the
//! comparator. Everything here is plain data; the interesting machinery
//! lives in `cts-fp` (acceptance intervals), `cts-params` (parameter
//! expansion), and `cts-runner` (dispatch and comparison).

pub mod value;

pub use value::{ScalarType, Value};

pub type Result<T> = std::result::Result<T, CtsError>;

#[derive(thiserror::Error, Debug)]
pub enum CtsError {
    /// The executor lacks an optional capability a case needs. Cases hitting
    /// this are reported as skipped, never as failed.
    #[error("unsupported capability: {0}")]
    Unsupported(String),

    #[error("execution failed: {0}")]
    Execution(String),

    #[error("invalid program: {0}")]
    InvalidProgram(String),

    #[error("expected {expected} outputs, got {got}")]
    OutputArity { expected: usize, got: usize },

    #[error("operand type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: ScalarType, got: ScalarType },
}
