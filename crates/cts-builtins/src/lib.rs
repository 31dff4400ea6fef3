//! Conformance suites for the builtin operations.
//!
//! [`cases`] holds the per-builtin case tables; each file under `tests/`
//! instantiates one table and runs it across every delivery configuration
//! with [`run_with_all_sources`]. The [`SUITES`] registry gives drivers a
//! stable list of everything runnable.

pub mod cases;

use cts_params::ParamsBuilder;
use cts_runner::{run_builtin, BuiltinOp, Case, Executor, InputSource, RunConfig, RunReport};

/// One registered suite: the operation plus its case table constructor.
pub struct Suite {
    pub op: BuiltinOp,
    pub build: fn() -> Vec<Case>,
}

impl Suite {
    pub fn name(&self) -> &'static str {
        self.op.name()
    }
}

/// Every builtin suite, in registration order.
pub const SUITES: &[Suite] = &[
    Suite {
        op: BuiltinOp::Cos,
        build: cases::cos_cases,
    },
    Suite {
        op: BuiltinOp::Exp,
        build: cases::exp_cases,
    },
    Suite {
        op: BuiltinOp::Exp2,
        build: cases::exp2_cases,
    },
    Suite {
        op: BuiltinOp::Floor,
        build: cases::floor_cases,
    },
    Suite {
        op: BuiltinOp::Fract,
        build: cases::fract_cases,
    },
    Suite {
        op: BuiltinOp::InverseSqrt,
        build: cases::inverse_sqrt_cases,
    },
    Suite {
        op: BuiltinOp::Ldexp,
        build: cases::ldexp_cases,
    },
    Suite {
        op: BuiltinOp::Negation,
        build: cases::negation_cases,
    },
    Suite {
        op: BuiltinOp::Round,
        build: cases::round_cases,
    },
    Suite {
        op: BuiltinOp::Step,
        build: cases::step_cases,
    },
    Suite {
        op: BuiltinOp::QuantizeToF16,
        build: cases::quantize_to_f16_cases,
    },
];

/// Run one case table under every input source × vector width combination.
///
/// The configuration cross-product is itself a params expansion, so its
/// order is deterministic and each sub-run's case ids carry the
/// configuration prefix.
pub fn run_with_all_sources(
    executor: &dyn Executor,
    op: BuiltinOp,
    cases: &[Case],
) -> RunReport {
    let configs = ParamsBuilder::new()
        .combine("input_source", InputSource::ALL.map(|s| s.label()))
        .combine("vectorize", [1i64, 2, 3, 4])
        .build();

    let mut report = RunReport::new();
    for entry in &configs {
        let label = entry.params.text("input_source");
        let source = match InputSource::from_label(label) {
            Some(s) => s,
            None => panic!("unknown input source label '{label}'"),
        };
        let width = match entry.params.int("vectorize") {
            1 => None,
            w => Some(w as u32),
        };
        let config = RunConfig::new(source, width);
        report.merge(run_builtin(executor, op, &config, cases));
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use cts_ref::RefExecutor;

    #[test]
    fn test_registry_names_are_unique_and_nonempty() {
        let mut names: Vec<&str> = SUITES.iter().map(|s| s.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SUITES.len());
        for suite in SUITES {
            assert!(!(suite.build)().is_empty(), "{} has no cases", suite.name());
        }
    }

    #[test]
    fn test_all_sources_covers_sixteen_configurations() {
        let table = cases::floor_cases();
        let cases = &table[..3];
        let report = run_with_all_sources(&RefExecutor::new(), BuiltinOp::Floor, cases);
        assert_eq!(report.total(), 16 * cases.len());
        report.assert_all_passed();
    }
}
