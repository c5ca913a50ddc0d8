//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_exists` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Reading hostnames from arguments, a file or stdin
//! - Printing the JSON result and choosing the exit code
//!
//! All core functionality is implemented in the library crate.

use std::process;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use domain_exists::app::{
    collect_hostnames, evaluate_exit_code, print_error_statistics, print_summary, write_result,
    ErrorStatistics,
};
use domain_exists::initialization::init_logger_with;
use domain_exists::{resolve_batch, Config, HickoryResolverFactory};

#[tokio::main]
async fn main() {
    let config = Config::parse();

    match run(config).await {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("domain_exists error: {:#}", e);
            process::exit(1);
        }
    }
}

async fn run(config: Config) -> Result<i32> {
    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let hostnames = collect_hostnames(&config.hostnames, config.file.as_deref())
        .await
        .context("Failed to read hostnames")?;

    let start_time = Instant::now();
    let request = config.to_request(hostnames);
    let result = resolve_batch(request, Arc::new(HickoryResolverFactory)).await;

    print_error_statistics(&ErrorStatistics::from_outcomes(&result.results));
    print_summary(&result.summary, start_time.elapsed().as_secs_f64());

    write_result(std::io::stdout().lock(), &result, config.pretty)?;

    Ok(evaluate_exit_code(config.fail_on, &result.summary))
}
