//! Top-level case / subcase execution with scoped fixtures.

use std::panic::{catch_unwind, AssertUnwindSafe};

use cts_core::{CtsError, Result};
use cts_params::{CaseEntry, TestParams};
use tracing::debug;

use crate::report::RunReport;

/// What one subcase reports back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaseOutcome {
    Pass,
    Fail(String),
    Skip(String),
}

/// Execute a fully expanded plan.
///
/// `setup` runs exactly once per top-level entry and its fixture is shared
/// by every subcase under that entry; the fixture is dropped on every exit
/// path before the next entry's setup runs, so state never leaks between
/// unrelated cases. A `setup` returning `Unsupported` skips the whole
/// entry; any other setup error fails it.
///
/// Subcase panics are caught and recorded as failures — one misbehaving
/// subcase never suppresses its siblings or the remaining entries, and
/// results collected before an abort are always retained in the report.
pub fn run_plan<F>(
    entries: &[CaseEntry],
    mut setup: impl FnMut(&TestParams) -> Result<F>,
    mut test: impl FnMut(&mut F, &TestParams, &TestParams) -> CaseOutcome,
) -> RunReport {
    let mut report = RunReport::new();

    for entry in entries {
        let case_id = entry.params.to_string();
        debug!(case = %case_id, subcases = entry.subcases.len(), "setup");

        let mut fixture = match setup(&entry.params) {
            Ok(fixture) => fixture,
            Err(CtsError::Unsupported(reason)) => {
                for sub in &entry.subcases {
                    report.skip(subcase_id(&case_id, sub), reason.clone());
                }
                continue;
            }
            Err(err) => {
                for sub in &entry.subcases {
                    report.fail(subcase_id(&case_id, sub), format!("setup failed: {err}"));
                }
                continue;
            }
        };

        for sub in &entry.subcases {
            let id = subcase_id(&case_id, sub);
            let outcome = catch_unwind(AssertUnwindSafe(|| {
                test(&mut fixture, &entry.params, sub)
            }))
            .unwrap_or_else(|payload| CaseOutcome::Fail(panic_message(payload)));

            match outcome {
                CaseOutcome::Pass => report.pass(id),
                CaseOutcome::Fail(message) => report.fail(id, message),
                CaseOutcome::Skip(reason) => report.skip(id, reason),
            }
        }
        // Fixture dropped here, before the next entry's setup.
    }

    report
}

fn subcase_id(case_id: &str, sub: &TestParams) -> String {
    match (case_id.is_empty(), sub.is_empty()) {
        (true, true) => String::from("<default>"),
        (true, false) => sub.to_string(),
        (false, true) => case_id.to_owned(),
        (false, false) => format!("{case_id}:{sub}"),
    }
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("panicked: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("panicked: {s}")
    } else {
        String::from("panicked")
    }
}
