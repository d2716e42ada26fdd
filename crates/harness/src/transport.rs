//! Transport port - interface for sending requests
//!
//! The runner only knows this trait; the reqwest-backed implementation
//! lives in the client crate, and tests substitute mocks.

use smokehound_domain::{ApiRequest, ApiResponse};
use std::future::Future;
use thiserror::Error;

/// Errors from the transport layer.
///
/// These describe requests that could not be completed at all, as opposed
/// to responses that failed a check.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The request exceeded its deadline.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// Configured timeout in milliseconds.
        timeout_ms: u64,
    },

    /// The host name could not be resolved.
    #[error("DNS resolution failed for {host}: {message}")]
    DnsError {
        /// Host that failed to resolve.
        host: String,
        /// Resolver error detail.
        message: String,
    },

    /// The target actively refused the connection.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Host that refused.
        host: String,
        /// Port that refused.
        port: u16,
    },

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The redirect limit was exceeded.
    #[error("too many redirects (limit {max})")]
    TooManyRedirects {
        /// Configured redirect limit.
        max: usize,
    },

    /// The request URL could not be built.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request body could not be serialized.
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// Any other client failure.
    #[error("HTTP client error: {0}")]
    Other(String),
}

/// Result type alias for transport operations.
pub type TransportResult<T> = Result<T, ClientError>;

/// Port for sending HTTP requests.
///
/// Implementations resolve the request path against their base URL,
/// serialize the payload and collect the full response body.
pub trait Transport: Send + Sync {
    /// Sends one request and returns the completed response.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] when the request cannot be completed:
    /// timeouts, connection failures, invalid URLs or bodies.
    fn send(
        &self,
        request: &ApiRequest,
    ) -> impl Future<Output = TransportResult<ApiResponse>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn error_messages_name_the_cause() {
        assert_eq!(
            ClientError::Timeout { timeout_ms: 30_000 }.to_string(),
            "request timed out after 30000ms"
        );
        assert_eq!(
            ClientError::ConnectionRefused {
                host: "localhost".to_string(),
                port: 8080,
            }
            .to_string(),
            "connection refused by localhost:8080"
        );
        assert_eq!(
            ClientError::DnsError {
                host: "nosuch.example".to_string(),
                message: "not found".to_string(),
            }
            .to_string(),
            "DNS resolution failed for nosuch.example: not found"
        );
    }
}
