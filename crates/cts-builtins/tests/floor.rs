//! `floor` conformance: correctly rounded everywhere.

use cts_builtins::{cases, run_with_all_sources};
use cts_ref::RefExecutor;
use cts_runner::BuiltinOp;

#[test]
fn test_floor_all_delivery_configurations() {
    let cases = cases::floor_cases();
    let report = run_with_all_sources(&RefExecutor::new(), BuiltinOp::Floor, &cases);
    assert_eq!(report.total(), 16 * cases.len());
    report.assert_all_passed();
}
