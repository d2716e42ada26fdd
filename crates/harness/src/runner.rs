//! Sequential case runner
//!
//! Runs cases strictly one at a time over a [`Transport`]. Within a case,
//! steps run in order and the first failing or erroring step ends the
//! case; across cases nothing stops the run, so one broken endpoint
//! still leaves results for all the others.

use crate::checks;
use crate::transport::{Transport, TransportResult};
use chrono::Utc;
use smokehound_domain::{CaseOutcome, CaseReport, CaseSpec, RunReport, StepReport, StepSpec};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Runs smoke cases sequentially over a transport.
pub struct Runner<T: Transport> {
    transport: Arc<T>,
}

impl<T: Transport> Runner<T> {
    /// Creates a runner over the given transport.
    #[must_use]
    pub const fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Runs every case in order and aggregates the results.
    pub async fn run(&self, cases: Vec<CaseSpec>) -> RunReport {
        let started_at = Utc::now();
        let started = Instant::now();
        info!(cases = cases.len(), "starting smoke run");

        let mut reports = Vec::with_capacity(cases.len());
        for case in &cases {
            reports.push(self.run_case(case).await);
        }

        let report = RunReport::new(started_at, reports, elapsed_ms(started));
        info!(
            total = report.total,
            passed = report.passed,
            failed = report.failed,
            errored = report.errored,
            duration_ms = report.duration_ms,
            "smoke run finished"
        );
        report
    }

    /// Runs a single case and reports its outcome.
    pub async fn run_case(&self, case: &CaseSpec) -> CaseReport {
        let started = Instant::now();
        let mut steps = Vec::with_capacity(case.len());
        let mut outcome = CaseOutcome::Passed;

        for step in &case.steps {
            match self.run_step(step).await {
                Ok(report) => {
                    let passed = report.passed();
                    steps.push(report);
                    if !passed {
                        outcome = CaseOutcome::Failed;
                        break;
                    }
                }
                Err(err) => {
                    outcome = CaseOutcome::Errored {
                        message: err.to_string(),
                    };
                    break;
                }
            }
        }

        let duration_ms = elapsed_ms(started);
        match &outcome {
            CaseOutcome::Passed => {
                info!(suite = %case.suite, case = %case.name, duration_ms, "case passed");
            }
            CaseOutcome::Failed => {
                warn!(suite = %case.suite, case = %case.name, duration_ms, "case failed");
            }
            CaseOutcome::Errored { message } => {
                error!(suite = %case.suite, case = %case.name, error = %message, "case errored");
            }
        }

        CaseReport {
            suite: case.suite,
            name: case.name.clone(),
            outcome,
            steps,
            duration_ms,
        }
    }

    async fn run_step(&self, step: &StepSpec) -> TransportResult<StepReport> {
        debug!(request = %step.request.describe(), "sending request");
        let response = self.transport.send(&step.request).await?;
        let checks = checks::evaluate(&step.expect, &response);
        Ok(StepReport {
            request: step.request.describe(),
            status: response.status,
            checks,
            duration_ms: u64::try_from(response.duration.as_millis()).unwrap_or(u64::MAX),
        })
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
