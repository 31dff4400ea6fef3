//! `exp` conformance: 3 + 2·|x| ULP, open-ended past the f32 range.

use cts_builtins::{cases, run_with_all_sources};
use cts_ref::RefExecutor;
use cts_runner::BuiltinOp;

#[test]
fn test_exp_all_delivery_configurations() {
    let cases = cases::exp_cases();
    let report = run_with_all_sources(&RefExecutor::new(), BuiltinOp::Exp, &cases);
    assert_eq!(report.total(), 16 * cases.len());
    report.assert_all_passed();
}
