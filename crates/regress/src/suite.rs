//! Test suites and execution.

use std::panic::{self, AssertUnwindSafe};

use crate::output::{Failure, TestOutput};

/// Test function signature. Assertions go through the context.
pub type TestFn = fn(&mut TestCtx);

/// Per-test assertion context.
#[derive(Default)]
pub struct TestCtx {
    failures: Vec<Failure>,
}

impl TestCtx {
    fn new() -> Self {
        Self::default()
    }

    /// Record an assertion. Prefer the [`crate::check!`] macro, which fills
    /// in the source location.
    pub fn check(&mut self, cond: bool, desc: &str, file: &str, line: u32) {
        if !cond {
            self.failures.push(Failure {
                desc: desc.to_string(),
                file: file.to_string(),
                line,
            });
        }
    }

    /// Whether any assertion has failed so far.
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Outcome of a single test.
#[derive(Clone, Debug)]
pub struct TestResult {
    pub suite: String,
    pub name: String,
    pub failures: Vec<Failure>,
}

impl TestResult {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Aggregate outcome of a suite run, children included.
#[derive(Clone, Debug, Default)]
pub struct SuiteReport {
    pub results: Vec<TestResult>,
}

impl SuiteReport {
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}

/// A named collection of test functions and child suites.
pub struct TestSuite {
    name: String,
    tests: Vec<(String, TestFn)>,
    children: Vec<TestSuite>,
}

impl TestSuite {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tests: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a test function. Prefer the [`crate::add_test!`] macro,
    /// which names the test after the function.
    pub fn register(&mut self, name: impl Into<String>, func: TestFn) {
        self.tests.push((name.into(), func));
    }

    /// Nest another suite; it runs after this suite's own tests.
    pub fn add_suite(&mut self, child: TestSuite) {
        self.children.push(child);
    }

    /// Run every test (and child suite) against the given output.
    ///
    /// Each test runs to completion regardless of other tests' outcomes;
    /// a panic inside a test body is caught and reported as a failure of
    /// that test alone.
    pub fn run(&self, output: &mut dyn TestOutput) -> SuiteReport {
        let mut report = SuiteReport::default();
        output.suite_started(&self.name);

        for (name, func) in &self.tests {
            let mut ctx = TestCtx::new();
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| func(&mut ctx)));

            let mut failures = std::mem::take(&mut ctx.failures);
            if let Err(payload) = outcome {
                failures.push(Failure {
                    desc: format!("test panicked: {}", panic_message(payload.as_ref())),
                    file: String::new(),
                    line: 0,
                });
            }

            if failures.is_empty() {
                output.test_passed(&self.name, name);
            } else {
                for failure in &failures {
                    output.assertion_failed(&self.name, name, failure);
                }
            }

            report.results.push(TestResult {
                suite: self.name.clone(),
                name: name.clone(),
                failures,
            });
        }

        for child in &self.children {
            let child_report = child.run(output);
            report.results.extend(child_report.results);
        }

        output.suite_ended(&self.name);
        report
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
