//! Response expectations
//!
//! Declarative checks a case applies to a response: which status codes
//! are acceptable and which body conditions must hold. Evaluation lives
//! in the harness; these types only describe what to verify.

use serde::{Deserialize, Serialize};

/// Expected status code specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatusExpectation {
    /// Exact status code match.
    Exact(u16),
    /// Inclusive range of acceptable codes.
    Range {
        /// Lower bound, inclusive.
        min: u16,
        /// Upper bound, inclusive.
        max: u16,
    },
    /// One of several acceptable codes.
    OneOf(Vec<u16>),
}

impl StatusExpectation {
    /// Checks if a status code satisfies this expectation.
    #[must_use]
    pub fn matches(&self, status: u16) -> bool {
        match self {
            Self::Exact(code) => *code == status,
            Self::Range { min, max } => status >= *min && status <= *max,
            Self::OneOf(codes) => codes.contains(&status),
        }
    }

    /// Returns a human-readable description of the expectation.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Exact(code) => code.to_string(),
            Self::Range { min, max } => format!("{min}-{max}"),
            Self::OneOf(codes) => codes
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" or "),
        }
    }
}

/// A condition the response body must satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BodyCheck {
    /// Body must parse as JSON.
    IsJson,
    /// The value at a JSON pointer must equal the expected value.
    JsonField {
        /// JSON pointer into the body, e.g. `/category/name`.
        pointer: String,
        /// Value the field must equal.
        expected: serde_json::Value,
    },
}

impl BodyCheck {
    /// Builds a field check from a dotted path, e.g. `category.name`.
    #[must_use]
    pub fn field(path: &str, expected: impl Into<serde_json::Value>) -> Self {
        Self::JsonField {
            pointer: format!("/{}", path.replace('.', "/")),
            expected: expected.into(),
        }
    }

    /// Returns a human-readable description of the check.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::IsJson => "body is valid JSON".to_string(),
            Self::JsonField { pointer, expected } => {
                format!("field '{pointer}' equals {expected}")
            }
        }
    }
}

/// Everything a step expects from its response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expectations {
    /// Acceptable status codes.
    pub status: StatusExpectation,
    /// Body conditions, checked in order after the status.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub body: Vec<BodyCheck>,
}

impl Expectations {
    /// Creates expectations with the given status specification.
    #[must_use]
    pub const fn new(status: StatusExpectation) -> Self {
        Self {
            status,
            body: Vec::new(),
        }
    }

    /// Expects exactly 200.
    #[must_use]
    pub const fn ok() -> Self {
        Self::new(StatusExpectation::Exact(200))
    }

    /// Expects one of the given codes.
    #[must_use]
    pub fn one_of(codes: Vec<u16>) -> Self {
        Self::new(StatusExpectation::OneOf(codes))
    }

    /// Appends a body check.
    #[must_use]
    pub fn with_check(mut self, check: BodyCheck) -> Self {
        self.body.push(check);
        self
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn exact_matches_only_its_code() {
        let expectation = StatusExpectation::Exact(200);
        assert!(expectation.matches(200));
        assert!(!expectation.matches(201));
        assert!(!expectation.matches(404));
    }

    #[test]
    fn range_is_inclusive() {
        let expectation = StatusExpectation::Range { min: 200, max: 299 };
        assert!(expectation.matches(200));
        assert!(expectation.matches(299));
        assert!(!expectation.matches(300));
        assert!(!expectation.matches(199));
    }

    #[test]
    fn one_of_accepts_each_listed_code() {
        let expectation = StatusExpectation::OneOf(vec![200, 404]);
        assert!(expectation.matches(200));
        assert!(expectation.matches(404));
        assert!(!expectation.matches(400));
    }

    #[test]
    fn descriptions_are_readable() {
        assert_eq!(StatusExpectation::Exact(200).description(), "200");
        assert_eq!(
            StatusExpectation::Range { min: 200, max: 299 }.description(),
            "200-299"
        );
        assert_eq!(
            StatusExpectation::OneOf(vec![200, 400]).description(),
            "200 or 400"
        );
    }

    #[test]
    fn field_check_builds_a_json_pointer() {
        let check = BodyCheck::field("name", "Buddy");
        assert_eq!(
            check,
            BodyCheck::JsonField {
                pointer: "/name".to_string(),
                expected: json!("Buddy"),
            }
        );
    }

    #[test]
    fn nested_field_paths_become_nested_pointers() {
        let check = BodyCheck::field("category.name", "Dogs");
        assert_eq!(
            check,
            BodyCheck::JsonField {
                pointer: "/category/name".to_string(),
                expected: json!("Dogs"),
            }
        );
    }

    #[test]
    fn expectations_builder_collects_checks() {
        let expect = Expectations::ok()
            .with_check(BodyCheck::IsJson)
            .with_check(BodyCheck::field("id", 12345));
        assert_eq!(expect.status, StatusExpectation::Exact(200));
        assert_eq!(expect.body.len(), 2);
    }

    #[test]
    fn status_expectation_serde_is_untagged() {
        let exact: StatusExpectation = serde_json::from_str("200").unwrap();
        assert_eq!(exact, StatusExpectation::Exact(200));

        let one_of: StatusExpectation = serde_json::from_str("[200,404]").unwrap();
        assert_eq!(one_of, StatusExpectation::OneOf(vec![200, 404]));

        let range: StatusExpectation =
            serde_json::from_str(r#"{"min":200,"max":299}"#).unwrap();
        assert_eq!(range, StatusExpectation::Range { min: 200, max: 299 });
    }
}
