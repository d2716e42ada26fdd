//! Smokehound Domain - Core smoke-suite model
//!
//! This crate contains the pure model for Smokehound: requests and
//! responses, pet-store payloads, response expectations and run reports.
//! No I/O and no HTTP; sending requests and evaluating checks happen in
//! the harness and client crates.

pub mod case;
pub mod check;
pub mod error;
pub mod payload;
pub mod report;
pub mod request;
pub mod response;

pub use case::{CaseSpec, StepSpec, Suite};
pub use check::{BodyCheck, Expectations, StatusExpectation};
pub use error::{DomainError, DomainResult};
pub use payload::{Category, Order, OrderStatus, Pet, PetStatus, Tag, User};
pub use report::{CaseOutcome, CaseReport, CheckReport, RunReport, StepReport};
pub use request::{ApiRequest, HttpMethod, RequestBody};
pub use response::ApiResponse;
