//! Fixtures that exercise the runner with itself.
//!
//! `WasRun` records what the runner did to it; `TestCaseTest` drives
//! `WasRun` through the runner and checks the record.

use crate::assertions::ensure_eq;
use crate::errors::{TestFailure, TestOutcome};
use crate::test_case::{Fixture, Test, TestCase, TestMethods};
use crate::test_result::TestResult;
use crate::test_suite::TestSuite;

/// Names of the self tests, in the order `self_test_suite` runs them.
pub const SELF_TESTS: [&str; 7] = [
    "test_template_method",
    "test_result",
    "test_failed_result",
    "test_failed_result_formatting",
    "test_suite",
    "test_tear_down_after_failure",
    "test_unknown_method",
];

/// Fixture whose `log` records the order of set up, body and tear down.
#[derive(Debug, Default)]
pub struct WasRun {
    pub was_set_up: bool,
    pub was_run: bool,
    pub log: String,
}

impl WasRun {
    fn test_method(&mut self) -> TestOutcome {
        self.was_run = true;
        self.log.push_str("test_method ");
        Ok(())
    }

    fn test_broken_method(&mut self) -> TestOutcome {
        Err(TestFailure::broken("test_broken_method"))
    }
}

impl Fixture for WasRun {
    fn methods() -> TestMethods<Self> {
        TestMethods::new()
            .register("test_method", Self::test_method)
            .register("test_broken_method", Self::test_broken_method)
    }

    fn set_up(&mut self) {
        self.was_set_up = true;
        self.log = "set_up ".to_string();
    }

    fn tear_down(&mut self) {
        self.log.push_str("tear_down ");
    }
}

/// Self tests of the runner, each starting from a fresh `TestResult`.
#[derive(Debug, Default)]
pub struct TestCaseTest {
    result: TestResult,
}

impl TestCaseTest {
    fn test_template_method(&mut self) -> TestOutcome {
        let mut test = TestCase::<WasRun>::new("test_method");
        test.run(&mut self.result);
        ensure_eq("set_up test_method tear_down ", test.fixture().log.as_str())
    }

    fn test_result(&mut self) -> TestOutcome {
        let mut test = TestCase::<WasRun>::new("test_method");
        test.run(&mut self.result);
        ensure_eq("1 run, 0 failed", self.result.summary().as_str())
    }

    fn test_failed_result(&mut self) -> TestOutcome {
        let mut test = TestCase::<WasRun>::new("test_broken_method");
        test.run(&mut self.result);
        ensure_eq("1 run, 1 failed", self.result.summary().as_str())
    }

    fn test_failed_result_formatting(&mut self) -> TestOutcome {
        self.result.test_started();
        self.result
            .test_failed("test_failed_result_formatting", TestFailure::broken("formatting"));
        ensure_eq("1 run, 1 failed", self.result.summary().as_str())
    }

    fn test_suite(&mut self) -> TestOutcome {
        let mut suite = TestSuite::new();
        suite.add(TestCase::<WasRun>::new("test_method"));
        suite.add(TestCase::<WasRun>::new("test_broken_method"));
        suite.run(&mut self.result);
        ensure_eq("2 run, 1 failed", self.result.summary().as_str())
    }

    fn test_tear_down_after_failure(&mut self) -> TestOutcome {
        let mut test = TestCase::<WasRun>::new("test_broken_method");
        test.run(&mut self.result);
        ensure_eq("set_up tear_down ", test.fixture().log.as_str())
    }

    fn test_unknown_method(&mut self) -> TestOutcome {
        let mut test = TestCase::<WasRun>::new("test_missing");
        test.run(&mut self.result);
        ensure_eq("1 run, 1 failed", self.result.summary().as_str())?;
        ensure_eq(
            "no test method named 'test_missing'",
            self.result.failures()[0].failure.to_string().as_str(),
        )
    }
}

impl Fixture for TestCaseTest {
    fn methods() -> TestMethods<Self> {
        TestMethods::new()
            .register("test_template_method", Self::test_template_method)
            .register("test_result", Self::test_result)
            .register("test_failed_result", Self::test_failed_result)
            .register("test_failed_result_formatting", Self::test_failed_result_formatting)
            .register("test_suite", Self::test_suite)
            .register("test_tear_down_after_failure", Self::test_tear_down_after_failure)
            .register("test_unknown_method", Self::test_unknown_method)
    }

    fn set_up(&mut self) {
        self.result = TestResult::new();
    }
}

/// The hardcoded suite of runner self tests.
pub fn self_test_suite() -> TestSuite {
    let mut suite = TestSuite::named("TestCaseTest");
    for name in SELF_TESTS {
        suite.add(TestCase::<TestCaseTest>::new(name));
    }
    suite
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_test_suite_passes() {
        let mut result = TestResult::new();
        self_test_suite().run(&mut result);
        assert_eq!("7 run, 0 failed", result.summary());
    }

    #[test]
    fn test_every_self_test_is_registered() {
        let registered: Vec<_> = TestCaseTest::methods().names().collect();
        assert_eq!(SELF_TESTS.to_vec(), registered);
    }
}
