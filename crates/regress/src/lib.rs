//! Minimal regression-test harness with pluggable failure reporting.
//!
//! Engine regression tests register plain functions on a [`TestSuite`] and
//! assert conditions through the [`check!`] macro. How failures are reported
//! is up to the [`TestOutput`] passed to [`TestSuite::run`]: log and keep
//! going, panic on the first failure, or record everything for inspection.
//!
//! Tests are isolated: a failed assertion (or a panic) marks its own test
//! failed and the remaining tests still run.
//!
//! ## Example
//!
//! ```
//! use regress::{add_test, check, ConsoleOutput, TestCtx, TestSuite};
//!
//! fn math_holds(ctx: &mut TestCtx) {
//!     check!(ctx, 2 + 2 == 4);
//!     check!(ctx, 1.0f32.sin() < 1.0, "sine stays below one");
//! }
//!
//! let mut suite = TestSuite::new("smoke");
//! add_test!(suite, math_holds);
//!
//! let report = suite.run(&mut ConsoleOutput);
//! assert!(report.all_passed());
//! ```

mod output;
mod suite;

pub use output::{ConsoleOutput, Failure, PanicOutput, RecordingOutput, TestOutput};
pub use suite::{SuiteReport, TestCtx, TestResult, TestSuite};

/// Register a function as a test under its own name.
#[macro_export]
macro_rules! add_test {
    ($suite:expr, $func:path) => {
        $suite.register(stringify!($func), $func)
    };
}

/// Assert a condition inside a test, recording the source location on
/// failure. An optional description replaces the stringified condition.
#[macro_export]
macro_rules! check {
    ($ctx:expr, $cond:expr) => {
        $ctx.check($cond, stringify!($cond), file!(), line!())
    };
    ($ctx:expr, $cond:expr, $desc:expr) => {
        $ctx.check($cond, $desc, file!(), line!())
    };
}
