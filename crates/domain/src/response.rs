//! Response representation
//!
//! [`ApiResponse`] captures what came back from one request: status code,
//! headers, the raw body and how long the round trip took. Checks read
//! from it; nothing here performs I/O.

use std::collections::HashMap;
use std::time::Duration;

/// A completed HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers, first value per name.
    pub headers: HashMap<String, String>,
    /// Raw response body. Non-UTF-8 bytes are replaced.
    pub body: String,
    /// Round-trip time as measured by the transport.
    pub duration: Duration,
}

impl ApiResponse {
    /// Creates a response from raw body bytes.
    #[must_use]
    pub fn new(
        status: u16,
        headers: HashMap<String, String>,
        body: Vec<u8>,
        duration: Duration,
    ) -> Self {
        Self {
            status,
            headers,
            body: String::from_utf8_lossy(&body).into_owned(),
            duration,
        }
    }

    /// Returns true for a 2xx status.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Looks up a header by name, case-insensitively.
    #[must_use]
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Parses the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if the body is not valid JSON.
    pub fn body_as_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use pretty_assertions::assert_eq;

    fn response(status: u16, body: &str) -> ApiResponse {
        ApiResponse::new(
            status,
            HashMap::from([("Content-Type".to_string(), "application/json".to_string())]),
            body.as_bytes().to_vec(),
            Duration::from_millis(42),
        )
    }

    #[test]
    fn success_range() {
        assert!(response(200, "").is_success());
        assert!(response(204, "").is_success());
        assert!(!response(404, "").is_success());
        assert!(!response(500, "").is_success());
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let resp = response(200, "{}");
        assert_eq!(resp.get_header("content-type"), Some("application/json"));
        assert_eq!(resp.get_header("CONTENT-TYPE"), Some("application/json"));
        assert_eq!(resp.get_header("x-missing"), None);
    }

    #[test]
    fn body_parses_as_json() {
        let resp = response(200, r#"{"name":"Buddy"}"#);
        let value = resp.body_as_json().unwrap();
        assert_eq!(value["name"], "Buddy");
    }

    #[test]
    fn invalid_json_body_is_an_error() {
        let resp = response(200, "not json");
        assert!(resp.body_as_json().is_err());
    }

    #[test]
    fn non_utf8_bytes_are_replaced() {
        let resp = ApiResponse::new(
            200,
            HashMap::new(),
            vec![0xff, 0xfe],
            Duration::from_millis(1),
        );
        assert!(!resp.body.is_empty());
    }
}
