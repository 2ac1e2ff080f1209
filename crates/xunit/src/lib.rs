//! A minimal xUnit-style test runner.
//!
//! Tests are plain functions over a fixture, registered by name:
//!
//! ```text
//! TestSuite → [TestCase<F> ...] → Fixture::set_up → TestMethod → Fixture::tear_down
//!                                          ↓
//!                                     TestResult ("2 run, 1 failed")
//! ```
//!
//! A test body reports failure by returning `Err(TestFailure)`. Panics are
//! not caught; they indicate a defect in the code under test or the runner.

pub mod assertions;
pub mod errors;
pub mod fixtures;
pub mod test_case;
pub mod test_result;
pub mod test_suite;

pub use assertions::{ensure, ensure_eq};
pub use errors::{TestFailure, TestOutcome};
pub use fixtures::{self_test_suite, TestCaseTest, WasRun};
pub use test_case::{Fixture, Test, TestCase, TestMethod, TestMethods};
pub use test_result::{FailedTest, TestResult};
pub use test_suite::TestSuite;
