//! Batched dispatch and comparison of builtin cases.

use cts_core::CtsError;
use tracing::{debug, warn};

use crate::case::Case;
use crate::executor::{BuiltinOp, CaseInputs, Executor, InputSource, Program};
use crate::report::RunReport;

/// Cases per dispatch. Batching amortizes per-dispatch overhead; it never
/// changes a verdict because every output is judged against its own case.
pub const DEFAULT_BATCH_SIZE: usize = 256;

/// One delivery configuration for a run: which input source, which vector
/// width, how many cases per dispatch.
#[derive(Clone, Copy, Debug)]
pub struct RunConfig {
    pub input_source: InputSource,
    pub vectorize: Option<u32>,
    pub batch_size: usize,
}

impl RunConfig {
    pub fn new(input_source: InputSource, vectorize: Option<u32>) -> Self {
        Self {
            input_source,
            vectorize,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

/// Run every case against `executor` under one delivery configuration.
///
/// Case ids are `<op>/<source>/<width>#<index>` with the index taken from
/// the deterministic case order, so a failure reported here names a
/// reproducible case. A batch-level executor error fails (or skips, for
/// `Unsupported`) exactly the cases in that batch and moves on.
pub fn run_builtin(
    executor: &dyn Executor,
    op: BuiltinOp,
    config: &RunConfig,
    cases: &[Case],
) -> RunReport {
    for case in cases {
        assert_eq!(
            case.inputs.len(),
            op.arity(),
            "case arity does not match {op}"
        );
    }

    let program = Program::new(op, config.input_source, config.vectorize);
    let key = program.key();
    let mut report = RunReport::new();

    for (batch_index, batch) in cases.chunks(config.batch_size.max(1)).enumerate() {
        let base = batch_index * config.batch_size.max(1);
        let inputs: Vec<CaseInputs> = batch.iter().map(|c| c.inputs.clone()).collect();
        debug!(program = %key, batch = batch_index, cases = batch.len(), "dispatch");

        let outputs = match executor.execute(&program, &inputs) {
            Ok(outputs) => outputs,
            Err(CtsError::Unsupported(reason)) => {
                for (i, _) in batch.iter().enumerate() {
                    report.skip(format!("{key}#{}", base + i), reason.clone());
                }
                continue;
            }
            Err(err) => {
                // The executor rejected the whole dispatch: attribute the
                // failure to each of its cases, keep running siblings.
                for (i, case) in batch.iter().enumerate() {
                    report.fail(
                        format!("{key}#{}", base + i),
                        format!("execution error on inputs {}: {err}", case.describe_inputs()),
                    );
                }
                continue;
            }
        };

        if outputs.len() != batch.len() {
            for (i, _) in batch.iter().enumerate() {
                report.fail(
                    format!("{key}#{}", base + i),
                    format!(
                        "executor returned {} outputs for {} cases",
                        outputs.len(),
                        batch.len()
                    ),
                );
            }
            continue;
        }

        for (i, (case, actual)) in batch.iter().zip(outputs.iter()).enumerate() {
            let id = format!("{key}#{}", base + i);
            match case.expected.check(actual) {
                Ok(()) => report.pass(id),
                Err(mismatch) => {
                    warn!(case = %id, %mismatch, "case failed");
                    report.fail(
                        id,
                        format!("inputs {}: {mismatch}", case.describe_inputs()),
                    );
                }
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::Expectation;
    use cts_core::{Result, Value};
    use cts_fp::FpInterval;
    use smallvec::smallvec;

    /// Executor that floors its single operand, for exercising the loop.
    struct FloorExec;

    impl Executor for FloorExec {
        fn execute(&self, _program: &Program, inputs: &[CaseInputs]) -> Result<Vec<Value>> {
            Ok(inputs
                .iter()
                .map(|ops| Value::F32(ops[0].as_f32().unwrap().floor()))
                .collect())
        }
    }

    fn floor_case(x: f64) -> Case {
        Case::new(
            [Value::F32(x as f32)],
            Expectation::Interval(FpInterval::point(x.floor())),
        )
    }

    #[test]
    fn test_batching_does_not_change_verdicts() {
        let cases: Vec<Case> = (0..10).map(|i| floor_case(i as f64 + 0.5)).collect();
        let mut small = RunConfig::new(InputSource::Const, None);
        small.batch_size = 3;
        let big = RunConfig::new(InputSource::Const, None);

        let a = run_builtin(&FloorExec, BuiltinOp::Floor, &small, &cases);
        let b = run_builtin(&FloorExec, BuiltinOp::Floor, &big, &cases);
        assert_eq!(a.passed(), 10);
        assert_eq!(b.passed(), 10);
    }

    #[test]
    fn test_case_ids_index_across_batches() {
        let cases: Vec<Case> = (0..5).map(|i| floor_case(i as f64)).collect();
        let mut config = RunConfig::new(InputSource::Uniform, Some(2));
        config.batch_size = 2;
        let report = run_builtin(&FloorExec, BuiltinOp::Floor, &config, &cases);
        assert_eq!(report.results[4].id, "floor/uniform/vec2#4");
    }

    #[test]
    #[should_panic(expected = "arity")]
    fn test_arity_mismatch_is_a_precondition() {
        let bad = Case::new(
            [Value::F32(1.0), Value::F32(2.0)],
            Expectation::Interval(FpInterval::point(1.0)),
        );
        let config = RunConfig::new(InputSource::Const, None);
        let _ = run_builtin(&FloorExec, BuiltinOp::Floor, &config, &[bad]);
    }

    #[test]
    fn test_unsupported_skips_instead_of_failing() {
        struct NoCaps;
        impl Executor for NoCaps {
            fn execute(&self, _p: &Program, _i: &[CaseInputs]) -> Result<Vec<Value>> {
                Err(CtsError::Unsupported("f16 not available".into()))
            }
        }
        let cases: Vec<Case> = vec![floor_case(1.0)];
        let config = RunConfig::new(InputSource::Const, None);
        let report = run_builtin(&NoCaps, BuiltinOp::Floor, &config, &cases);
        assert_eq!(report.skipped(), 1);
        assert_eq!(report.failed(), 0);
        assert!(report.all_passed());
    }

    #[test]
    fn test_output_count_mismatch_fails_batch() {
        struct ShortExec;
        impl Executor for ShortExec {
            fn execute(&self, _p: &Program, _i: &[CaseInputs]) -> Result<Vec<Value>> {
                Ok(vec![])
            }
        }
        let cases: Vec<Case> = vec![floor_case(1.0), floor_case(2.0)];
        let config = RunConfig::new(InputSource::Const, None);
        let report = run_builtin(&ShortExec, BuiltinOp::Floor, &config, &cases);
        assert_eq!(report.failed(), 2);
    }

    #[test]
    fn test_failure_message_carries_inputs() {
        struct WrongExec;
        impl Executor for WrongExec {
            fn execute(&self, _p: &Program, inputs: &[CaseInputs]) -> Result<Vec<Value>> {
                Ok(inputs.iter().map(|_| Value::F32(99.0)).collect())
            }
        }
        let cases = vec![floor_case(1.5)];
        let config = RunConfig::new(InputSource::Const, None);
        let report = run_builtin(&WrongExec, BuiltinOp::Floor, &config, &cases);
        let failure = report.failures().next().unwrap();
        let msg = failure.message.as_deref().unwrap();
        assert!(msg.contains("1.5"), "{msg}");
        assert!(msg.contains("99.0"), "{msg}");
    }

    #[test]
    fn test_smallvec_inputs_round_trip() {
        let case = Case {
            inputs: smallvec![Value::F32(1.0), Value::I32(3)],
            expected: Expectation::Interval(FpInterval::point(8.0)),
        };
        assert_eq!(case.describe_inputs(), "(1.0 (0x3f800000), 3)");
    }
}
