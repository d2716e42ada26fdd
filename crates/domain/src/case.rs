//! Case and suite definitions

use crate::check::Expectations;
use crate::request::ApiRequest;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three endpoint groups the smoke run covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suite {
    /// `/pet` endpoints.
    Pet,
    /// `/store` endpoints.
    Store,
    /// `/user` endpoints.
    User,
}

impl Suite {
    /// Returns the lowercase suite name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pet => "pet",
            Self::Store => "store",
            Self::User => "user",
        }
    }
}

impl fmt::Display for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One request plus the expectations applied to its response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepSpec {
    /// Request to send.
    pub request: ApiRequest,
    /// Expectations on the response.
    pub expect: Expectations,
}

impl StepSpec {
    /// Creates a step.
    #[must_use]
    pub const fn new(request: ApiRequest, expect: Expectations) -> Self {
        Self { request, expect }
    }
}

/// A named smoke case: one or more steps run in order.
///
/// Most cases are a single step. A case fails as soon as one of its steps
/// fails; later cases still run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseSpec {
    /// Suite this case belongs to.
    pub suite: Suite,
    /// Short case name, unique within its suite.
    pub name: String,
    /// Steps in execution order.
    pub steps: Vec<StepSpec>,
}

impl CaseSpec {
    /// Creates an empty case.
    #[must_use]
    pub fn new(suite: Suite, name: impl Into<String>) -> Self {
        Self {
            suite,
            name: name.into(),
            steps: Vec::new(),
        }
    }

    /// Creates a single-step case.
    #[must_use]
    pub fn single(
        suite: Suite,
        name: impl Into<String>,
        request: ApiRequest,
        expect: Expectations,
    ) -> Self {
        Self::new(suite, name).with_step(request, expect)
    }

    /// Appends a step.
    #[must_use]
    pub fn with_step(mut self, request: ApiRequest, expect: Expectations) -> Self {
        self.steps.push(StepSpec::new(request, expect));
        self
    }

    /// Number of steps in the case.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if the case has no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn suite_names() {
        assert_eq!(Suite::Pet.as_str(), "pet");
        assert_eq!(Suite::Store.to_string(), "store");
        assert_eq!(Suite::User.as_str(), "user");
    }

    #[test]
    fn single_builds_a_one_step_case() {
        let case = CaseSpec::single(
            Suite::Store,
            "get inventory",
            ApiRequest::get("/store/inventory"),
            Expectations::ok(),
        );
        assert_eq!(case.len(), 1);
        assert_eq!(case.name, "get inventory");
        assert_eq!(case.steps[0].request.path, "/store/inventory");
    }

    #[test]
    fn with_step_appends_in_order() {
        let case = CaseSpec::new(Suite::Pet, "find pets by status")
            .with_step(ApiRequest::get("/a"), Expectations::ok())
            .with_step(ApiRequest::get("/b"), Expectations::ok());
        assert_eq!(case.len(), 2);
        assert!(!case.is_empty());
        assert_eq!(case.steps[1].request.path, "/b");
    }
}
