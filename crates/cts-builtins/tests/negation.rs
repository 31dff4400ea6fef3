//! Unary `-x` conformance: exact for every representable input.

use cts_builtins::{cases, run_with_all_sources};
use cts_ref::RefExecutor;
use cts_runner::BuiltinOp;

#[test]
fn test_negation_all_delivery_configurations() {
    let cases = cases::negation_cases();
    let report = run_with_all_sources(&RefExecutor::new(), BuiltinOp::Negation, &cases);
    assert_eq!(report.total(), 16 * cases.len());
    report.assert_all_passed();
}
