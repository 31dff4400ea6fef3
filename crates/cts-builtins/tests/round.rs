//! `round` conformance: correctly rounded with ties to even — a tie
//! accepts only the even neighbor, never the span between integers.

use cts_builtins::{cases, run_with_all_sources};
use cts_ref::RefExecutor;
use cts_runner::BuiltinOp;

#[test]
fn test_round_all_delivery_configurations() {
    let cases = cases::round_cases();
    let report = run_with_all_sources(&RefExecutor::new(), BuiltinOp::Round, &cases);
    assert_eq!(report.total(), 16 * cases.len());
    report.assert_all_passed();
}
