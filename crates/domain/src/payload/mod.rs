//! Pet-store wire payloads
//!
//! Entity types serialized to and from the pet-store JSON API. Field
//! names follow the API's camelCase convention via serde renames.

mod order;
mod pet;
mod user;

pub use order::{Order, OrderStatus};
pub use pet::{Category, Pet, PetStatus, Tag};
pub use user::User;
