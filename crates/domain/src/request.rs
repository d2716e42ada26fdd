//! Request description types
//!
//! An [`ApiRequest`] names everything the harness needs to issue one HTTP
//! call: method, path relative to the base URL, query parameters and an
//! optional typed payload. Requests are plain data; sending them is the
//! transport's job.

use crate::error::{DomainError, DomainResult};
use crate::payload::{Order, Pet, User};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// HTTP methods used by the smoke suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// HTTP GET
    #[default]
    Get,
    /// HTTP POST
    Post,
    /// HTTP PUT
    Put,
    /// HTTP DELETE
    Delete,
}

impl HttpMethod {
    /// Returns the string representation of the method.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Returns true if this method carries a request body.
    #[must_use]
    pub const fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            _ => Err(DomainError::UnsupportedMethod(s.to_string())),
        }
    }
}

/// Typed request payload.
///
/// The suite only ever posts pet-store entities, so the body is a closed
/// enum rather than raw JSON. Serialization to the wire format happens in
/// the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RequestBody {
    /// No body is sent.
    #[default]
    None,
    /// A pet entity.
    Pet(Pet),
    /// A store order entity.
    Order(Order),
    /// A user entity.
    User(User),
}

impl RequestBody {
    /// Returns true if no payload is present.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl From<Pet> for RequestBody {
    fn from(pet: Pet) -> Self {
        Self::Pet(pet)
    }
}

impl From<Order> for RequestBody {
    fn from(order: Order) -> Self {
        Self::Order(order)
    }
}

impl From<User> for RequestBody {
    fn from(user: User) -> Self {
        Self::User(user)
    }
}

/// A single request the harness will send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Path relative to the base URL, starting with `/`.
    pub path: String,
    /// Query parameters as ordered key/value pairs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub query: Vec<(String, String)>,
    /// Optional typed payload.
    #[serde(default, skip_serializing_if = "RequestBody::is_none")]
    pub body: RequestBody,
}

impl ApiRequest {
    /// Creates a request with no query parameters and no body.
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::None,
        }
    }

    /// Creates a GET request.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    /// Creates a DELETE request.
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Creates a POST request carrying the given payload.
    #[must_use]
    pub fn post(path: impl Into<String>, body: impl Into<RequestBody>) -> Self {
        Self {
            body: body.into(),
            ..Self::new(HttpMethod::Post, path)
        }
    }

    /// Creates a PUT request carrying the given payload.
    #[must_use]
    pub fn put(path: impl Into<String>, body: impl Into<RequestBody>) -> Self {
        Self {
            body: body.into(),
            ..Self::new(HttpMethod::Put, path)
        }
    }

    /// Appends a query parameter.
    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Returns a short human-readable form, e.g. `GET /pet/12345?x=y`.
    ///
    /// Used for logs and reports; query values are shown unencoded.
    #[must_use]
    pub fn describe(&self) -> String {
        if self.query.is_empty() {
            format!("{} {}", self.method, self.path)
        } else {
            let query = self
                .query
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join("&");
            format!("{} {}?{}", self.method, self.path, query)
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn method_as_str() {
        assert_eq!(HttpMethod::Get.as_str(), "GET");
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
    }

    #[test]
    fn method_from_str_is_case_insensitive() {
        assert_eq!("get".parse::<HttpMethod>().unwrap(), HttpMethod::Get);
        assert_eq!("Post".parse::<HttpMethod>().unwrap(), HttpMethod::Post);
    }

    #[test]
    fn method_from_str_rejects_unknown() {
        let err = "PATCH".parse::<HttpMethod>().unwrap_err();
        assert_eq!(err, DomainError::UnsupportedMethod("PATCH".to_string()));
    }

    #[test]
    fn method_has_body() {
        assert!(HttpMethod::Post.has_body());
        assert!(HttpMethod::Put.has_body());
        assert!(!HttpMethod::Get.has_body());
        assert!(!HttpMethod::Delete.has_body());
    }

    #[test]
    fn get_request_has_no_body() {
        let request = ApiRequest::get("/store/inventory");
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "/store/inventory");
        assert_eq!(request.body, RequestBody::None);
    }

    #[test]
    fn post_request_wraps_payload() {
        let pet = Pet::new(1, "Rex");
        let request = ApiRequest::post("/pet", pet.clone());
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.body, RequestBody::Pet(pet));
    }

    #[test]
    fn describe_includes_query() {
        let request = ApiRequest::get("/pet/findByStatus")
            .with_query("status", "available");
        assert_eq!(request.describe(), "GET /pet/findByStatus?status=available");
    }

    #[test]
    fn describe_without_query() {
        let request = ApiRequest::delete("/pet/12345");
        assert_eq!(request.describe(), "DELETE /pet/12345");
    }
}
