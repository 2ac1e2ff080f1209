use crate::test_case::{Fixture, Test, TestCase};
use crate::test_result::TestResult;

/// An ordered collection of tests run one after another.
///
/// A suite is itself a `Test`, so suites nest.
pub struct TestSuite {
    name: String,
    tests: Vec<Box<dyn Test>>,
}

impl TestSuite {
    pub fn new() -> Self {
        Self::named("TestSuite")
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tests: Vec::new(),
        }
    }

    /// Builds a suite with one case per method registered by `F`.
    pub fn for_fixture<F: Fixture>() -> Self {
        let type_name = std::any::type_name::<F>();
        let short_name = type_name.rsplit("::").next().unwrap_or(type_name);
        let methods = F::methods();
        let mut suite = Self::named(short_name);
        for name in methods.names() {
            suite.add(TestCase::<F>::new(name));
        }
        suite
    }

    pub fn add(&mut self, test: impl Test + 'static) {
        self.tests.push(Box::new(test));
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}

impl Default for TestSuite {
    fn default() -> Self {
        Self::new()
    }
}

impl Test for TestSuite {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&mut self, result: &mut TestResult) {
        log::debug!("Running suite {} ({} tests)", self.name, self.tests.len());
        for test in &mut self.tests {
            test.run(result);
        }
    }
}
