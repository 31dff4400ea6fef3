//! Per-case outcomes and run aggregation.

use serde::Serialize;

/// Terminal status of one case. Skip is distinct from both pass and fail:
/// it records an unmet external precondition, not a verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CaseStatus {
    Pass,
    Fail,
    Skip,
}

/// One case's outcome, with enough context to reproduce a failure.
#[derive(Clone, Debug, Serialize)]
pub struct CaseResult {
    pub id: String,
    pub status: CaseStatus,
    /// Inputs, expected acceptance, and actual output for failures; the
    /// skip reason for skips; absent for passes.
    pub message: Option<String>,
}

/// Ordered collection of case results for one run.
#[derive(Clone, Debug, Default, Serialize)]
pub struct RunReport {
    pub results: Vec<CaseResult>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pass(&mut self, id: String) {
        self.results.push(CaseResult {
            id,
            status: CaseStatus::Pass,
            message: None,
        });
    }

    pub fn fail(&mut self, id: String, message: String) {
        self.results.push(CaseResult {
            id,
            status: CaseStatus::Fail,
            message: Some(message),
        });
    }

    pub fn skip(&mut self, id: String, reason: String) {
        self.results.push(CaseResult {
            id,
            status: CaseStatus::Skip,
            message: Some(reason),
        });
    }

    pub fn passed(&self) -> usize {
        self.count(CaseStatus::Pass)
    }

    pub fn failed(&self) -> usize {
        self.count(CaseStatus::Fail)
    }

    pub fn skipped(&self) -> usize {
        self.count(CaseStatus::Skip)
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    fn count(&self, status: CaseStatus) -> usize {
        self.results.iter().filter(|r| r.status == status).count()
    }

    /// True when no case failed. Skips do not count against a run.
    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &CaseResult> {
        self.results
            .iter()
            .filter(|r| r.status == CaseStatus::Fail)
    }

    /// Append another report's results, preserving both orders.
    pub fn merge(&mut self, other: RunReport) {
        self.results.extend(other.results);
    }

    /// Panic with the first failures listed if any case failed. For use in
    /// test suites where a failing case should fail the enclosing test.
    pub fn assert_all_passed(&self) {
        if self.all_passed() {
            return;
        }
        let shown: Vec<String> = self
            .failures()
            .take(10)
            .map(|r| {
                format!(
                    "  {}: {}",
                    r.id,
                    r.message.as_deref().unwrap_or("(no detail)")
                )
            })
            .collect();
        panic!(
            "{} of {} cases failed:\n{}",
            self.failed(),
            self.total(),
            shown.join("\n")
        );
    }
}

impl std::fmt::Display for RunReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} passed, {} failed, {} skipped",
            self.passed(),
            self.failed(),
            self.skipped()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_all_passed() {
        let mut r = RunReport::new();
        r.pass("a".into());
        r.skip("b".into(), "no f16".into());
        assert!(r.all_passed());
        assert_eq!((r.passed(), r.failed(), r.skipped()), (1, 0, 1));

        r.fail("c".into(), "boom".into());
        assert!(!r.all_passed());
        assert_eq!(r.total(), 3);
    }

    #[test]
    fn test_merge_preserves_order() {
        let mut a = RunReport::new();
        a.pass("1".into());
        let mut b = RunReport::new();
        b.pass("2".into());
        a.merge(b);
        assert_eq!(a.results[1].id, "2");
    }

    #[test]
    fn test_summary_format() {
        let mut r = RunReport::new();
        r.pass("a".into());
        assert_eq!(r.to_string(), "1 passed, 0 failed, 0 skipped");
    }

    #[test]
    #[should_panic(expected = "1 of 1 cases failed")]
    fn test_assert_all_passed_panics_with_detail() {
        let mut r = RunReport::new();
        r.fail("x".into(), "out of interval".into());
        r.assert_all_passed();
    }
}
