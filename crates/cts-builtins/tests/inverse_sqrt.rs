//! `inverseSqrt` conformance: 2 ULP for positive operands, unconstrained
//! at and below zero.

use cts_builtins::{cases, run_with_all_sources};
use cts_ref::RefExecutor;
use cts_runner::BuiltinOp;

#[test]
fn test_inverse_sqrt_all_delivery_configurations() {
    let cases = cases::inverse_sqrt_cases();
    let report = run_with_all_sources(&RefExecutor::new(), BuiltinOp::InverseSqrt, &cases);
    assert_eq!(report.total(), 16 * cases.len());
    report.assert_all_passed();
}
