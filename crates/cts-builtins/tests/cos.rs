//! `cos` conformance: 2^-11 absolute error inside [-π, π], unconstrained
//! outside.

use cts_builtins::{cases, run_with_all_sources};
use cts_ref::RefExecutor;
use cts_runner::BuiltinOp;

#[test]
fn test_cos_all_delivery_configurations() {
    let cases = cases::cos_cases();
    let report = run_with_all_sources(&RefExecutor::new(), BuiltinOp::Cos, &cases);
    assert_eq!(report.total(), 16 * cases.len());
    assert_eq!(report.skipped(), 0);
    report.assert_all_passed();
}
