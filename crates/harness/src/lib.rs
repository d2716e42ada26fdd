//! Smokehound Harness - Case execution over a pluggable transport
//!
//! The harness owns the [`Transport`] port, the check evaluator, the
//! sequential [`Runner`] and the built-in pet-store suites. It performs
//! no HTTP itself; the client crate supplies the real transport.

pub mod checks;
pub mod runner;
pub mod suites;
pub mod transport;

pub use runner::Runner;
pub use transport::{ClientError, Transport, TransportResult};
