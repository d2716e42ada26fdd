//! Run reports
//!
//! Outcome types produced by the harness: one [`CheckReport`] per
//! evaluated check, rolled up into steps, cases and finally a
//! [`RunReport`] with aggregate counters. All of it serializes to JSON
//! for the optional report file.

use crate::case::Suite;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Result of evaluating a single check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    /// What was checked.
    pub description: String,
    /// Whether the check passed.
    pub passed: bool,
    /// Actual value observed, when one was extracted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
    /// Failure detail, present only when the check failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckReport {
    /// Creates a passing result.
    #[must_use]
    pub fn pass(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            passed: true,
            actual: None,
            error: None,
        }
    }

    /// Creates a passing result with the observed value.
    #[must_use]
    pub fn pass_with_value(description: impl Into<String>, actual: impl Into<String>) -> Self {
        Self {
            actual: Some(actual.into()),
            ..Self::pass(description)
        }
    }

    /// Creates a failing result.
    #[must_use]
    pub fn fail(description: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            passed: false,
            actual: None,
            error: Some(error.into()),
        }
    }

    /// Creates a failing result with the observed value.
    #[must_use]
    pub fn fail_with_value(
        description: impl Into<String>,
        actual: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            actual: Some(actual.into()),
            ..Self::fail(description, error)
        }
    }
}

/// Result of one completed request and its checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepReport {
    /// Short request description, e.g. `GET /pet/12345`.
    pub request: String,
    /// Status code actually received.
    pub status: u16,
    /// Check results, status check first.
    pub checks: Vec<CheckReport>,
    /// Round-trip time in milliseconds.
    pub duration_ms: u64,
}

impl StepReport {
    /// Returns true if every check passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|check| check.passed)
    }

    /// Returns the checks that failed.
    pub fn failures(&self) -> impl Iterator<Item = &CheckReport> {
        self.checks.iter().filter(|check| !check.passed)
    }
}

/// How a case ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CaseOutcome {
    /// Every step completed and every check passed.
    Passed,
    /// A response arrived but at least one check failed.
    Failed,
    /// A request could not be completed at all.
    Errored {
        /// Transport error description.
        message: String,
    },
}

impl CaseOutcome {
    /// Returns true for [`CaseOutcome::Passed`].
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

/// Result of one case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseReport {
    /// Suite the case belongs to.
    pub suite: Suite,
    /// Case name.
    pub name: String,
    /// Final outcome.
    pub outcome: CaseOutcome,
    /// Reports for the steps that ran, in order.
    pub steps: Vec<StepReport>,
    /// Wall-clock case duration in milliseconds.
    pub duration_ms: u64,
}

impl CaseReport {
    /// Returns true if the case passed.
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        self.outcome.is_passed()
    }
}

/// Aggregate result of a full smoke run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Unique run identifier.
    pub run_id: Uuid,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// Per-case reports in execution order.
    pub cases: Vec<CaseReport>,
    /// Number of cases run.
    pub total: usize,
    /// Cases that passed.
    pub passed: usize,
    /// Cases that failed a check.
    pub failed: usize,
    /// Cases that could not complete a request.
    pub errored: usize,
    /// Wall-clock run duration in milliseconds.
    pub duration_ms: u64,
}

impl RunReport {
    /// Builds a report from case results, computing the counters.
    #[must_use]
    pub fn new(started_at: DateTime<Utc>, cases: Vec<CaseReport>, duration_ms: u64) -> Self {
        let total = cases.len();
        let passed = cases.iter().filter(|case| case.is_passed()).count();
        let failed = cases
            .iter()
            .filter(|case| case.outcome == CaseOutcome::Failed)
            .count();
        let errored = total - passed - failed;
        Self {
            run_id: Uuid::now_v7(),
            started_at,
            cases,
            total,
            passed,
            failed,
            errored,
            duration_ms,
        }
    }

    /// Returns true if every case passed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.passed == self.total
    }

    /// Pass rate as a percentage. An empty run counts as 100%.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            (self.passed as f64 / self.total as f64) * 100.0
        }
    }

    /// Serializes the report as pretty-printed JSON with a trailing
    /// newline.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        let mut out = serde_json::to_string_pretty(self)?;
        out.push('\n');
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use pretty_assertions::assert_eq;

    fn step(passed: bool) -> StepReport {
        let check = if passed {
            CheckReport::pass_with_value("status is 200", "200")
        } else {
            CheckReport::fail_with_value("status is 200", "500", "expected status 200, got 500")
        };
        StepReport {
            request: "GET /store/inventory".to_string(),
            status: if passed { 200 } else { 500 },
            checks: vec![check],
            duration_ms: 10,
        }
    }

    fn case(name: &str, outcome: CaseOutcome) -> CaseReport {
        let steps = match outcome {
            CaseOutcome::Passed => vec![step(true)],
            CaseOutcome::Failed => vec![step(false)],
            CaseOutcome::Errored { .. } => Vec::new(),
        };
        CaseReport {
            suite: Suite::Store,
            name: name.to_string(),
            outcome,
            steps,
            duration_ms: 12,
        }
    }

    #[test]
    fn step_passed_requires_every_check() {
        let mut report = step(true);
        assert!(report.passed());
        report.checks.push(CheckReport::fail("body is valid JSON", "not JSON"));
        assert!(!report.passed());
        assert_eq!(report.failures().count(), 1);
    }

    #[test]
    fn run_report_computes_counters() {
        let report = RunReport::new(
            Utc::now(),
            vec![
                case("a", CaseOutcome::Passed),
                case("b", CaseOutcome::Failed),
                case(
                    "c",
                    CaseOutcome::Errored {
                        message: "connection refused".to_string(),
                    },
                ),
                case("d", CaseOutcome::Passed),
            ],
            120,
        );
        assert_eq!(report.total, 4);
        assert_eq!(report.passed, 2);
        assert_eq!(report.failed, 1);
        assert_eq!(report.errored, 1);
        assert!(!report.all_passed());
        assert!((report.pass_rate() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_run_passes_trivially() {
        let report = RunReport::new(Utc::now(), Vec::new(), 0);
        assert!(report.all_passed());
        assert!((report.pass_rate() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn pretty_json_ends_with_newline() {
        let report = RunReport::new(Utc::now(), vec![case("a", CaseOutcome::Passed)], 5);
        let json = report.to_pretty_json().unwrap();
        assert!(json.ends_with('\n'));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total"], 1);
        assert_eq!(value["cases"][0]["outcome"]["type"], "passed");
    }

    #[test]
    fn errored_outcome_serializes_its_message() {
        let outcome = CaseOutcome::Errored {
            message: "request timed out after 30000ms".to_string(),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["type"], "errored");
        assert_eq!(json["message"], "request timed out after 30000ms");
    }
}
