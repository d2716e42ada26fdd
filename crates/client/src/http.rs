//! Pet-store transport implementation using reqwest.
//!
//! This adapter implements the harness `Transport` port. It resolves
//! request paths against the configured base URL, serializes payloads as
//! JSON and collects complete responses, mapping reqwest failures onto
//! the transport error taxonomy.

use std::collections::HashMap;
use std::error::Error as _;
use std::future::Future;
use std::time::{Duration, Instant};

use reqwest::{Client, Method, Url};
use smokehound_domain::{ApiRequest, ApiResponse, HttpMethod, RequestBody};
use smokehound_harness::{ClientError, Transport, TransportResult};

use crate::config::ClientConfig;

/// Redirect limit applied to every request.
const MAX_REDIRECTS: usize = 10;

/// User agent the client identifies itself with.
const USER_AGENT: &str = concat!("Smokehound/", env!("CARGO_PKG_VERSION"));

/// Pet-store API client backed by `reqwest::Client`.
pub struct PetStoreClient {
    client: Client,
    config: ClientConfig,
}

impl PetStoreClient {
    /// Creates a client for the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the base URL does not parse
    /// and [`ClientError::Other`] if the underlying client cannot be
    /// built.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        Url::parse(&config.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{e}: {}", config.base_url)))?;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| ClientError::Other(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// The base URL request paths are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    async fn execute(&self, request: &ApiRequest) -> TransportResult<ApiResponse> {
        let url = self.build_url(request)?;

        let start = Instant::now();

        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), url)
            .timeout(Duration::from_millis(self.config.timeout_ms));
        builder = attach_body(builder, &request.body);

        let response = builder.send().await.map_err(|e| self.map_error(&e))?;

        let status = response.status().as_u16();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("<binary>").to_string()))
            .collect();
        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::Other(format!("failed to read body: {e}")))?
            .to_vec();

        Ok(ApiResponse::new(status, headers, body, start.elapsed()))
    }

    /// Resolves a request against the base URL and encodes its query.
    fn build_url(&self, request: &ApiRequest) -> TransportResult<Url> {
        let joined = format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            request.path
        );
        let mut url =
            Url::parse(&joined).map_err(|e| ClientError::InvalidUrl(format!("{e}: {joined}")))?;

        if !request.query.is_empty() {
            let encoded = serde_urlencoded::to_string(&request.query)
                .map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
            url.set_query(Some(&encoded));
        }

        Ok(url)
    }

    /// Maps reqwest errors onto the transport error taxonomy.
    fn map_error(&self, error: &reqwest::Error) -> ClientError {
        if error.is_timeout() {
            return ClientError::Timeout {
                timeout_ms: self.config.timeout_ms,
            };
        }

        if error.is_connect() {
            let message = error_detail(error);
            let lowered = message.to_lowercase();
            let (host, port) = self.target(error);
            if lowered.contains("dns") || lowered.contains("resolve") {
                return ClientError::DnsError { host, message };
            }
            if lowered.contains("refused") {
                return ClientError::ConnectionRefused { host, port };
            }
            return ClientError::ConnectionFailed(message);
        }

        if error.is_redirect() {
            return ClientError::TooManyRedirects { max: MAX_REDIRECTS };
        }

        if error.is_builder() {
            return ClientError::InvalidBody(error.to_string());
        }

        ClientError::Other(error.to_string())
    }

    /// Host and port the failed request was aimed at, falling back to the
    /// configured base URL.
    fn target(&self, error: &reqwest::Error) -> (String, u16) {
        let url = error
            .url()
            .cloned()
            .or_else(|| Url::parse(&self.config.base_url).ok());
        let host = url
            .as_ref()
            .and_then(Url::host_str)
            .unwrap_or("unknown")
            .to_string();
        let port = url.as_ref().and_then(Url::port_or_known_default).unwrap_or(80);
        (host, port)
    }
}

impl Transport for PetStoreClient {
    fn send(
        &self,
        request: &ApiRequest,
    ) -> impl Future<Output = TransportResult<ApiResponse>> + Send {
        self.execute(request)
    }
}

/// Converts the domain method to a reqwest `Method`.
const fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// Attaches the typed payload as a JSON body.
fn attach_body(builder: reqwest::RequestBuilder, body: &RequestBody) -> reqwest::RequestBuilder {
    match body {
        RequestBody::None => builder,
        RequestBody::Pet(pet) => builder.json(pet),
        RequestBody::Order(order) => builder.json(order),
        RequestBody::User(user) => builder.json(user),
    }
}

/// Flattens an error and its sources into one message, so causes buried
/// in the chain (DNS failures, refused connections) stay visible.
fn error_detail(error: &reqwest::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(err) = source {
        message.push_str(": ");
        message.push_str(&err.to_string());
        source = err.source();
    }
    message
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use pretty_assertions::assert_eq;

    fn client(base_url: &str) -> PetStoreClient {
        PetStoreClient::new(ClientConfig::new(base_url)).unwrap()
    }

    #[test]
    fn method_conversion_covers_the_suite_verbs() {
        assert_eq!(to_reqwest_method(HttpMethod::Get), Method::GET);
        assert_eq!(to_reqwest_method(HttpMethod::Post), Method::POST);
        assert_eq!(to_reqwest_method(HttpMethod::Put), Method::PUT);
        assert_eq!(to_reqwest_method(HttpMethod::Delete), Method::DELETE);
    }

    #[test]
    fn client_creation_succeeds_with_defaults() {
        assert!(PetStoreClient::new(ClientConfig::default()).is_ok());
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = PetStoreClient::new(ClientConfig::new("not a url"));
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }

    #[test]
    fn build_url_appends_the_request_path() {
        let client = client("https://petstore.swagger.io/v2");
        let url = client.build_url(&ApiRequest::get("/pet/12345")).unwrap();
        assert_eq!(url.as_str(), "https://petstore.swagger.io/v2/pet/12345");
    }

    #[test]
    fn build_url_tolerates_a_trailing_slash() {
        let client = client("http://localhost:8080/v2/");
        let url = client.build_url(&ApiRequest::get("/store/inventory")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/v2/store/inventory");
    }

    #[test]
    fn build_url_encodes_query_parameters() {
        let client = client("https://petstore.swagger.io/v2");
        let request = ApiRequest::get("/user/login")
            .with_query("username", "test user")
            .with_query("password", "p&ss");
        let url = client.build_url(&request).unwrap();
        assert_eq!(url.query(), Some("username=test+user&password=p%26ss"));
    }

    #[test]
    fn base_url_is_exposed() {
        let client = client("https://petstore.swagger.io/v2");
        assert_eq!(client.base_url(), "https://petstore.swagger.io/v2");
    }

    #[tokio::test]
    async fn dead_port_maps_to_a_connection_error() {
        // Nothing listens on port 1; loopback refuses immediately.
        let client = client("http://127.0.0.1:1");
        let err = client
            .execute(&ApiRequest::get("/store/inventory"))
            .await
            .unwrap_err();
        assert!(
            matches!(
                err,
                ClientError::ConnectionRefused { .. } | ClientError::ConnectionFailed(_)
            ),
            "expected a connection error, got {err:?}"
        );
    }

    #[tokio::test]
    async fn unresponsive_server_maps_to_timeout() {
        // Bound but never accepted: the connect lands in the backlog and
        // the request then stalls until the deadline.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let config = ClientConfig::new(format!("http://{addr}")).with_timeout_ms(100);
        let client = PetStoreClient::new(config).unwrap();

        let err = client
            .execute(&ApiRequest::get("/store/inventory"))
            .await
            .unwrap_err();
        assert_eq!(err, ClientError::Timeout { timeout_ms: 100 });
    }
}
