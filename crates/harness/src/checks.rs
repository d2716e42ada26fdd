//! Check evaluation
//!
//! Applies a step's [`Expectations`] to a completed response and records
//! one [`CheckReport`] per check. The status check always runs first;
//! body checks run in declaration order. Evaluation never short-circuits,
//! so a report lists every check that was specified.

use smokehound_domain::{ApiResponse, BodyCheck, CheckReport, Expectations, StatusExpectation};

/// Evaluates every expectation against a response.
#[must_use]
pub fn evaluate(expect: &Expectations, response: &ApiResponse) -> Vec<CheckReport> {
    let mut reports = Vec::with_capacity(1 + expect.body.len());
    reports.push(check_status(&expect.status, response.status));
    for check in &expect.body {
        reports.push(check_body(check, response));
    }
    reports
}

fn check_status(expected: &StatusExpectation, status: u16) -> CheckReport {
    let description = format!("status is {}", expected.description());
    if expected.matches(status) {
        CheckReport::pass_with_value(description, status.to_string())
    } else {
        CheckReport::fail_with_value(
            description,
            status.to_string(),
            format!("expected status {}, got {status}", expected.description()),
        )
    }
}

fn check_body(check: &BodyCheck, response: &ApiResponse) -> CheckReport {
    let description = check.description();
    let json = match response.body_as_json() {
        Ok(json) => json,
        Err(err) => {
            return CheckReport::fail(description, format!("body is not valid JSON: {err}"));
        }
    };

    match check {
        BodyCheck::IsJson => CheckReport::pass(description),
        BodyCheck::JsonField { pointer, expected } => match json.pointer(pointer) {
            Some(actual) if actual == expected => {
                CheckReport::pass_with_value(description, value_to_string(actual))
            }
            Some(actual) => CheckReport::fail_with_value(
                description,
                value_to_string(actual),
                format!("expected {expected}, got {actual}"),
            ),
            None => CheckReport::fail(description, format!("no value at pointer '{pointer}'")),
        },
    }
}

/// Renders a JSON value for the `actual` report field. Strings are shown
/// without their quotes.
fn value_to_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
