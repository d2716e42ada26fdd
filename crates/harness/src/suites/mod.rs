//! Built-in smoke suites
//!
//! Fifteen cases across the pet, store and user endpoint groups, declared
//! in the order they run. The fixtures use fixed identifiers so a run is
//! self-contained: each suite creates what it later reads and deletes.
//! Lookups that race the server's own cleanup tolerate a 404.

pub mod pet;
pub mod store;
pub mod user;

use smokehound_domain::CaseSpec;

/// Pet id shared by the pet and store fixtures.
pub(crate) const PET_ID: i64 = 12345;

/// Order id used by the store cases.
pub(crate) const ORDER_ID: i64 = 1;

/// Username used by the user cases.
pub(crate) const USERNAME: &str = "testuser";

/// Password used by the user cases.
pub(crate) const PASSWORD: &str = "password123";

/// Returns every built-in case in execution order: pet, store, then user.
#[must_use]
pub fn all() -> Vec<CaseSpec> {
    let mut cases = pet::cases();
    cases.extend(store::cases());
    cases.extend(user::cases());
    cases
}
