//! Test failure types.

use thiserror::Error;

/// What a test body returns: `Ok(())` when it passed.
pub type TestOutcome = Result<(), TestFailure>;

/// Why a single test did not pass.
#[derive(Error, Debug)]
pub enum TestFailure {
    #[error("assertion failed: {0}")]
    AssertionFailed(String),

    /// The test body reported itself as broken.
    #[error("test is broken: {0}")]
    Broken(String),

    /// No method is registered under the requested test name.
    #[error("no test method named '{0}'")]
    UnknownTest(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TestFailure {
    pub fn broken(message: impl Into<String>) -> Self {
        Self::Broken(message.into())
    }
}
