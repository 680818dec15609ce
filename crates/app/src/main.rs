//! Assay - Main Entry Point
//!
//! Resolves the configuration, builds the clients and runs the selected
//! suites. Exits with status 1 when any check fails.

use std::process::ExitCode;
use std::sync::Arc;

use assay::suites;
use assay::{Cli, Target};
use assay_application::suite::{SuiteReport, SuiteRunner};
use assay_application::{ConfigResolver, GraphQlClient, RestApiClient, SharedConfig};
use assay_domain::Environment;
use assay_infrastructure::logging::init_tracing;
use assay_infrastructure::{FileResourceLoader, ReqwestHttpClient, SystemClock};
use clap::Parser;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    info!("Starting Assay v{}", env!("CARGO_PKG_VERSION"));

    let resolver = ConfigResolver::new(FileResourceLoader::new(&cli.config_dir))
        .with_overrides(cli.overrides());
    let shared = SharedConfig::new(resolver);
    let config = shared.get();

    let environment = config.environment();
    if !Environment::is_known(environment) {
        warn!("Environment '{environment}' is not one of dev, staging, prod");
    }
    info!(
        environment = %Environment::from_name(environment),
        base_url = config.base_url(),
        graphql_url = config.graphql_url(),
        max_retries = config.max_retries(),
        "Configuration ready"
    );

    let http = Arc::new(ReqwestHttpClient::from_config(&config)?);
    let runner = SuiteRunner::new(SystemClock::new()).with_stop_on_failure(cli.fail_fast);
    let mut reports = Vec::new();

    if cli.target.includes_rest() {
        let client = RestApiClient::new(Arc::clone(&http), Arc::clone(&config));
        reports.push(runner.run("REST API", suites::rest::checks(&client)).await);
    }
    if cli.target.includes_graphql() {
        let client = GraphQlClient::new(Arc::clone(&http), Arc::clone(&config));
        reports.push(runner.run("GraphQL API", suites::graphql::checks(&client)).await);
    }

    print_summary(cli.target, &reports);

    if reports.iter().all(SuiteReport::all_passed) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn print_summary(target: Target, reports: &[SuiteReport]) {
    println!();
    println!("Assay results ({target:?})");
    for report in reports {
        println!("  {report} in {} ms", report.elapsed().as_millis());
        for (name, message) in report.failures() {
            println!("    FAILED {name}: {message}");
        }
    }
}
