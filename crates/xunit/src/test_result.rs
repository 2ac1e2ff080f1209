use crate::errors::TestFailure;

/// A test that did not pass, with the reason.
#[derive(Debug)]
pub struct FailedTest {
    pub name: String,
    pub failure: TestFailure,
}

/// Counts of tests started and failed during a run.
#[derive(Debug, Default)]
pub struct TestResult {
    run_count: usize,
    error_count: usize,
    failures: Vec<FailedTest>,
}

impl TestResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn test_started(&mut self) {
        self.run_count += 1;
    }

    pub fn test_failed(&mut self, name: impl Into<String>, failure: TestFailure) {
        let name = name.into();
        log::warn!("{} failed: {}", name, failure);
        self.error_count += 1;
        self.failures.push(FailedTest { name, failure });
    }

    pub fn run_count(&self) -> usize {
        self.run_count
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn failures(&self) -> &[FailedTest] {
        &self.failures
    }

    pub fn was_successful(&self) -> bool {
        self.error_count == 0
    }

    /// Human-readable one-line summary, e.g. `"2 run, 1 failed"`.
    pub fn summary(&self) -> String {
        format!("{} run, {} failed", self.run_count, self.error_count)
    }
}
