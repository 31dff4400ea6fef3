//! End-to-end: cases built from acceptance intervals, dispatched in small
//! batches, with failures attributed to exactly the offending cases.

use cts_core::{Result, Value};
use cts_fp::builtins::floor_interval;
use cts_runner::{
    run_builtin, BuiltinOp, Case, CaseInputs, CaseStatus, Executor, InputSource, Program,
    RunConfig,
};

/// Computes floor correctly except at one poisoned input.
struct PoisonedFloor {
    poison: f32,
}

impl Executor for PoisonedFloor {
    fn execute(&self, _program: &Program, inputs: &[CaseInputs]) -> Result<Vec<Value>> {
        Ok(inputs
            .iter()
            .map(|case| {
                let x = case[0].as_f32().unwrap();
                if x == self.poison {
                    Value::F32(x.floor() + 1.0)
                } else {
                    Value::F32(x.floor())
                }
            })
            .collect())
    }
}

#[test]
fn test_only_the_wrong_output_fails() {
    let inputs = [-2.5, -1.0, 0.25, 1.0, 1.75, 2.0, 3.5, 7.25];
    let cases: Vec<Case> = inputs
        .iter()
        .map(|&x| Case::unary_f32(x, floor_interval))
        .collect();

    let executor = PoisonedFloor { poison: 1.75 };
    let config = RunConfig {
        input_source: InputSource::StorageRead,
        vectorize: None,
        batch_size: 3,
    };
    let report = run_builtin(&executor, BuiltinOp::Floor, &config, &cases);

    assert_eq!(report.total(), cases.len());
    assert_eq!(report.failed(), 1);

    let failure = report.failures().next().unwrap();
    // Input index 4, in the second batch of three.
    assert_eq!(failure.id, "floor/storage_r/scalar#4");
    assert!(failure.message.as_deref().unwrap().contains("outside"));

    // Batch siblings of the failure still pass.
    let sibling = report.results.iter().find(|r| r.id.ends_with("#3")).unwrap();
    assert_eq!(sibling.status, CaseStatus::Pass);
}
