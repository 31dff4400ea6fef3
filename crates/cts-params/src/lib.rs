//! Declarative parameter spaces for test generation.
//!
//! A parameter space is a set of named axes; expansion produces the ordered
//! cross product of their values, minus filtered-out combinations. Axes
//! added after [`ParamsBuilder::begin_subcases`] vary *within* one
//! top-level case: a runner performs heavyweight setup once per top-level
//! combination and iterates the subcases under that shared setup.
//!
//! Expansion is deterministic: the same definition always yields the same
//! record sequence in the same order, so failures can be bisected and
//! reproduced by id. Malformed definitions (binding the same axis twice)
//! panic at definition time, before anything expands.

mod builder;
mod value;

pub use builder::{CaseEntry, ParamsBuilder};
pub use value::{ParamValue, TestParams};
