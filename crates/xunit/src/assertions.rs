//! Assertion helpers that report failures as values instead of panicking.

use std::fmt::Debug;

use crate::errors::{TestFailure, TestOutcome};

/// Fails with `message` unless `condition` holds.
pub fn ensure(condition: bool, message: impl Into<String>) -> TestOutcome {
    if condition {
        Ok(())
    } else {
        Err(TestFailure::AssertionFailed(message.into()))
    }
}

/// Fails unless `actual` equals `expected`.
pub fn ensure_eq<T: PartialEq + Debug>(expected: T, actual: T) -> TestOutcome {
    ensure(
        expected == actual,
        format!("expected {:?}, got {:?}", expected, actual),
    )
}
