mod config;
mod main_lib;

use std::process::ExitCode;

use config::Config;
use main_lib::{init_tracing, run_self_tests};

fn main() -> anyhow::Result<ExitCode> {
    let config = Config::from_env()?;
    init_tracing(&config);

    let result = run_self_tests();
    println!("{}", result.summary());

    if result.was_successful() {
        Ok(ExitCode::SUCCESS)
    } else {
        for failed in result.failures() {
            tracing::error!("{}: {}", failed.name, failed.failure);
        }
        Ok(ExitCode::FAILURE)
    }
}
