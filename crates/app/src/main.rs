//! Smokehound - pet-store API smoke runner
//!
//! Runs the built-in suites against a pet-store deployment, prints a
//! per-case summary and exits nonzero when any case fails. Configured
//! entirely through environment variables:
//!
//! - `SMOKEHOUND_BASE_URL` - deployment to target (default: the public
//!   demo server)
//! - `SMOKEHOUND_TIMEOUT_MS` - per-request timeout in milliseconds
//! - `SMOKEHOUND_REPORT` - path to write the JSON run report to
//! - `RUST_LOG` - tracing filter (default: `info`)

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use smokehound_client::{ClientConfig, PetStoreClient};
use smokehound_domain::{CaseOutcome, RunReport};
use smokehound_harness::{Runner, suites};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Runtime settings read from the environment.
#[derive(Debug, Clone)]
struct RunConfig {
    client: ClientConfig,
    report_path: Option<PathBuf>,
}

impl RunConfig {
    fn from_env() -> Result<Self, String> {
        let mut client = ClientConfig::default();
        if let Ok(base_url) = std::env::var("SMOKEHOUND_BASE_URL") {
            client.base_url = base_url;
        }
        if let Ok(raw) = std::env::var("SMOKEHOUND_TIMEOUT_MS") {
            client.timeout_ms = raw.parse().map_err(|_| {
                format!("SMOKEHOUND_TIMEOUT_MS must be a number of milliseconds, got '{raw}'")
            })?;
        }
        let report_path = std::env::var("SMOKEHOUND_REPORT").ok().map(PathBuf::from);

        Ok(Self {
            client,
            report_path,
        })
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = RunConfig::from_env()?;
    tracing::info!(
        base_url = %config.client.base_url,
        timeout_ms = config.client.timeout_ms,
        "Smokehound v{}",
        env!("CARGO_PKG_VERSION")
    );

    let client = PetStoreClient::new(config.client)?;
    let runner = Runner::new(Arc::new(client));
    let report = runner.run(suites::all()).await;

    print_summary(&report);

    if let Some(path) = &config.report_path {
        tokio::fs::write(path, report.to_pretty_json()?).await?;
        tracing::info!(path = %path.display(), "run report written");
    }

    Ok(if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Prints per-case outcomes and the aggregate counters to stdout.
fn print_summary(report: &RunReport) {
    println!();
    for case in &report.cases {
        let marker = match &case.outcome {
            CaseOutcome::Passed => "PASS ",
            CaseOutcome::Failed => "FAIL ",
            CaseOutcome::Errored { .. } => "ERROR",
        };
        println!(
            "{marker} {}::{} ({} ms)",
            case.suite, case.name, case.duration_ms
        );
        match &case.outcome {
            CaseOutcome::Passed => {}
            CaseOutcome::Failed => {
                for step in &case.steps {
                    for check in step.failures() {
                        let detail = check.error.as_deref().unwrap_or("check failed");
                        println!("        {}: {detail}", step.request);
                    }
                }
            }
            CaseOutcome::Errored { message } => {
                println!("        {message}");
            }
        }
    }

    println!();
    println!("=== smoke summary ===");
    println!("passed:  {}", report.passed);
    println!("failed:  {}", report.failed);
    println!("errored: {}", report.errored);
    println!("total:   {} in {} ms", report.total, report.duration_ms);
}
