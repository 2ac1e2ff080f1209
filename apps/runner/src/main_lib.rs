use tdd_xunit::{self_test_suite, Test, TestResult};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, LogFormat};

/// Logs go to stderr so stdout carries only the summary line.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false).with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

/// Runs the runner's self tests and returns the result.
pub fn run_self_tests() -> TestResult {
    let mut suite = self_test_suite();
    let mut result = TestResult::new();
    tracing::info!("Running {} ({} tests)", suite.name(), suite.len());
    suite.run(&mut result);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_self_tests() {
        let result = run_self_tests();
        assert!(result.was_successful());
        assert_eq!("7 run, 0 failed", result.summary());
    }
}
