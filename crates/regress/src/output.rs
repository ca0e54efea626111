//! Failure reporting strategies.

/// One failed assertion.
#[derive(Clone, Debug)]
pub struct Failure {
    /// Assertion description (the condition text or a custom message)
    pub desc: String,
    /// Source file of the assertion
    pub file: String,
    /// Source line of the assertion
    pub line: u32,
}

/// Receives test lifecycle events and assertion failures.
///
/// Implementations decide what a failure means for the run: keep going,
/// abort, or just record it.
pub trait TestOutput {
    /// A suite is about to run its tests.
    fn suite_started(&mut self, _suite: &str) {}

    /// A suite (including children) finished.
    fn suite_ended(&mut self, _suite: &str) {}

    /// A test finished with no failed assertions.
    fn test_passed(&mut self, _suite: &str, _test: &str) {}

    /// An assertion inside a test failed.
    fn assertion_failed(&mut self, suite: &str, test: &str, failure: &Failure);
}

/// Reports failures through the `log` facade and keeps running.
pub struct ConsoleOutput;

impl TestOutput for ConsoleOutput {
    fn suite_started(&mut self, suite: &str) {
        log::info!("Running test suite '{suite}'");
    }

    fn test_passed(&mut self, suite: &str, test: &str) {
        log::debug!("[{suite}] {test}: passed");
    }

    fn assertion_failed(&mut self, suite: &str, test: &str, failure: &Failure) {
        log::error!(
            "[{suite}] {test}: assertion failed: {} ({}:{})",
            failure.desc,
            failure.file,
            failure.line
        );
    }
}

/// Terminates the run by panicking on the first failure.
///
/// Use where a broken regression should abort the process immediately,
/// e.g. in CI harness binaries.
pub struct PanicOutput;

impl TestOutput for PanicOutput {
    fn assertion_failed(&mut self, suite: &str, test: &str, failure: &Failure) {
        panic!(
            "[{suite}] {test}: assertion failed: {} ({}:{})",
            failure.desc, failure.file, failure.line
        );
    }
}

/// Collects every failure for later inspection. Useful when the caller
/// wants to make its own pass/fail decision.
#[derive(Default)]
pub struct RecordingOutput {
    /// (suite, test, failure) triples in arrival order
    pub failures: Vec<(String, String, Failure)>,
}

impl RecordingOutput {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TestOutput for RecordingOutput {
    fn assertion_failed(&mut self, suite: &str, test: &str, failure: &Failure) {
        self.failures
            .push((suite.to_string(), test.to_string(), failure.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure() -> Failure {
        Failure {
            desc: "1 == 2".into(),
            file: "dummy.rs".into(),
            line: 7,
        }
    }

    #[test]
    fn test_recording_output_collects() {
        let mut out = RecordingOutput::new();
        out.assertion_failed("suite", "test_a", &failure());
        out.assertion_failed("suite", "test_b", &failure());
        assert_eq!(out.failures.len(), 2);
        assert_eq!(out.failures[0].1, "test_a");
        assert_eq!(out.failures[1].2.line, 7);
    }

    #[test]
    fn test_panic_output_aborts_on_failure() {
        let result = std::panic::catch_unwind(|| {
            let mut out = PanicOutput;
            out.assertion_failed("suite", "test_a", &failure());
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_console_output_keeps_running() {
        let mut out = ConsoleOutput;
        out.assertion_failed("suite", "test_a", &failure());
        out.assertion_failed("suite", "test_b", &failure());
        // Still alive after two failures
        out.test_passed("suite", "test_c");
    }
}
