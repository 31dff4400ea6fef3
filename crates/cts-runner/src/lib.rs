//! Case runner and comparator.
//!
//! Consumes the cases built from `cts-fp` intervals and the parameter
//! records from `cts-params`, dispatches them in batches to an opaque
//! [`Executor`], and judges each output by interval containment rather
//! than equality. Failures are isolated per case: a rejected batch or a
//! panicking subcase never suppresses sibling results.

pub mod case;
pub mod executor;
pub mod plan;
pub mod report;
pub mod run;
pub mod validation;
pub mod wgsl;

pub use case::{Case, Expectation};
pub use executor::{BuiltinOp, CaseInputs, Executor, InputSource, Program};
pub use plan::{run_plan, CaseOutcome};
pub use report::{CaseResult, CaseStatus, RunReport};
pub use run::{run_builtin, RunConfig, DEFAULT_BATCH_SIZE};
pub use validation::{attempt_operation, Attempt};
