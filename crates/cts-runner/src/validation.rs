//! Expected-success / expected-failure checks for fallible operations.

use cts_core::Result;

/// Outcome of a single fallible operation, with the error text retained
/// for diagnostics when something that should have succeeded did not.
#[derive(Clone, Debug)]
pub struct Attempt {
    pub succeeded: bool,
    pub diagnostic: Option<String>,
}

impl Attempt {
    /// Compare against an expectation and describe any mismatch.
    pub fn expect(&self, should_succeed: bool) -> std::result::Result<(), String> {
        if self.succeeded == should_succeed {
            return Ok(());
        }
        if should_succeed {
            Err(format!(
                "operation failed unexpectedly: {}",
                self.diagnostic.as_deref().unwrap_or("(no diagnostic)")
            ))
        } else {
            Err(String::from("operation succeeded but was expected to fail"))
        }
    }
}

/// Run `f` and capture whether it succeeded, keeping the error text.
pub fn attempt_operation(f: impl FnOnce() -> Result<()>) -> Attempt {
    match f() {
        Ok(()) => Attempt {
            succeeded: true,
            diagnostic: None,
        },
        Err(err) => Attempt {
            succeeded: false,
            diagnostic: Some(err.to_string()),
        },
    }
}
