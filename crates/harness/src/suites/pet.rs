//! Pet endpoint cases
//!
//! Lifecycle of one pet: create it, update it, look it up, filter by
//! every status, then delete it. The public demo server prunes data
//! behind the scenes, so the lookup by id tolerates a 404.

use super::PET_ID;
use smokehound_domain::{
    ApiRequest, BodyCheck, CaseSpec, Category, Expectations, Pet, PetStatus, Suite, Tag,
};

/// The pet every pet case works with.
fn buddy() -> Pet {
    Pet::new(PET_ID, "Buddy")
        .with_category(Category::new(1, "Dogs"))
        .with_photo_url("http://example.com/photo.jpg")
        .with_tag(Tag::new(1, "friendly"))
}

/// Partial update payload: same id, new name, now sold. Unset fields are
/// left off the wire.
fn buddy_update() -> Pet {
    Pet::new(PET_ID, "Buddy Updated").with_status(PetStatus::Sold)
}

/// Pet suite cases in execution order.
#[must_use]
pub fn cases() -> Vec<CaseSpec> {
    let mut find_by_status = CaseSpec::new(Suite::Pet, "find pets by status");
    for status in PetStatus::ALL {
        find_by_status = find_by_status.with_step(
            ApiRequest::get("/pet/findByStatus").with_query("status", status.as_str()),
            Expectations::ok(),
        );
    }

    vec![
        CaseSpec::single(
            Suite::Pet,
            "add pet",
            ApiRequest::post("/pet", buddy()),
            Expectations::ok().with_check(BodyCheck::field("name", "Buddy")),
        ),
        CaseSpec::single(
            Suite::Pet,
            "update pet",
            ApiRequest::put("/pet", buddy_update()),
            Expectations::ok(),
        ),
        CaseSpec::single(
            Suite::Pet,
            "find pet by id",
            ApiRequest::get(format!("/pet/{PET_ID}")),
            Expectations::one_of(vec![200, 404]),
        ),
        find_by_status,
        CaseSpec::single(
            Suite::Pet,
            "delete pet",
            ApiRequest::delete(format!("/pet/{PET_ID}")),
            Expectations::ok(),
        ),
    ]
}
