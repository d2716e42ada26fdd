//! Smokehound Client - HTTP transport for the pet-store API
//!
//! Implements the harness transport port with a reqwest-backed client.
//! Holds the connection configuration, URL resolution and the mapping
//! from reqwest failures to transport errors.

pub mod config;
pub mod http;

pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};
pub use http::PetStoreClient;
