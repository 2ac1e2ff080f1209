//! Test cases and the template method that runs them.

use crate::errors::{TestFailure, TestOutcome};
use crate::test_result::TestResult;

/// A test body: receives the fixture after `set_up` has run.
pub type TestMethod<F> = fn(&mut F) -> TestOutcome;

/// Explicit mapping from test name to test body, in registration order.
pub struct TestMethods<F> {
    methods: Vec<(&'static str, TestMethod<F>)>,
}

impl<F> TestMethods<F> {
    pub fn new() -> Self {
        Self {
            methods: Vec::new(),
        }
    }

    /// Registers `method` under `name`. A later registration of the same
    /// name replaces the earlier one.
    pub fn register(mut self, name: &'static str, method: TestMethod<F>) -> Self {
        match self.methods.iter().position(|(existing, _)| *existing == name) {
            Some(index) => self.methods[index].1 = method,
            None => self.methods.push((name, method)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<TestMethod<F>> {
        self.methods
            .iter()
            .find(|(registered, _)| *registered == name)
            .map(|(_, method)| *method)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.methods.iter().map(|(name, _)| *name)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl<F> Default for TestMethods<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared state for a group of test methods.
///
/// `set_up` and `tear_down` bracket every test body; both default to doing
/// nothing.
pub trait Fixture: Default + 'static {
    /// The test bodies this fixture offers, by name.
    fn methods() -> TestMethods<Self>;

    fn set_up(&mut self) {}

    fn tear_down(&mut self) {}
}

/// Anything that can be run against a `TestResult`.
pub trait Test {
    fn name(&self) -> &str;

    fn run(&mut self, result: &mut TestResult);
}

/// A single named test method bound to a fresh fixture.
pub struct TestCase<F> {
    name: String,
    method: Option<TestMethod<F>>,
    fixture: F,
}

impl<F: Fixture> TestCase<F> {
    /// Resolves `name` against the fixture's registered methods.
    ///
    /// An unknown name is not an error here; running the case records it as
    /// a failed test.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let method = F::methods().get(&name);
        Self {
            name,
            method,
            fixture: F::default(),
        }
    }

    pub fn fixture(&self) -> &F {
        &self.fixture
    }

    /// Whether a method was found for this case's name.
    pub fn is_resolved(&self) -> bool {
        self.method.is_some()
    }
}

impl<F: Fixture> Test for TestCase<F> {
    fn name(&self) -> &str {
        &self.name
    }

    /// Template method: count, set up, invoke, record, tear down.
    ///
    /// `tear_down` runs whether or not the body failed.
    fn run(&mut self, result: &mut TestResult) {
        log::debug!("Running {}", self.name);
        result.test_started();
        self.fixture.set_up();

        let outcome = match self.method {
            Some(method) => method(&mut self.fixture),
            None => Err(TestFailure::UnknownTest(self.name.clone())),
        };
        if let Err(failure) = outcome {
            result.test_failed(self.name.clone(), failure);
        }

        self.fixture.tear_down();
    }
}
