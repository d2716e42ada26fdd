//! User endpoint cases
//!
//! Account lifecycle followed by the session endpoints. The account is
//! deleted before login runs, so login tolerates a 400 from servers that
//! validate credentials.

use super::{PASSWORD, USERNAME};
use smokehound_domain::{ApiRequest, CaseSpec, Expectations, Suite, User};

const USER_ID: i64 = 1001;

/// The account the user cases work with.
fn fixture_user() -> User {
    User::new(USER_ID, USERNAME)
        .with_name("Test", "User")
        .with_email("testuser@example.com")
        .with_password(PASSWORD)
        .with_phone("555-0100")
        .with_user_status(1)
}

/// Update payload: same username, changed contact details and password.
fn updated_user() -> User {
    User::new(USER_ID, USERNAME)
        .with_name("Updated", "User")
        .with_email("updated@example.com")
        .with_password("newpassword456")
        .with_phone("555-0199")
        .with_user_status(1)
}

/// User suite cases in execution order.
#[must_use]
pub fn cases() -> Vec<CaseSpec> {
    vec![
        CaseSpec::single(
            Suite::User,
            "create user",
            ApiRequest::post("/user", fixture_user()),
            Expectations::ok(),
        ),
        CaseSpec::single(
            Suite::User,
            "get user by username",
            ApiRequest::get(format!("/user/{USERNAME}")),
            Expectations::one_of(vec![200, 404]),
        ),
        CaseSpec::single(
            Suite::User,
            "update user",
            ApiRequest::put(format!("/user/{USERNAME}"), updated_user()),
            Expectations::ok(),
        ),
        CaseSpec::single(
            Suite::User,
            "delete user",
            ApiRequest::delete(format!("/user/{USERNAME}")),
            Expectations::ok(),
        ),
        CaseSpec::single(
            Suite::User,
            "login",
            ApiRequest::get("/user/login")
                .with_query("username", USERNAME)
                .with_query("password", PASSWORD),
            Expectations::one_of(vec![200, 400]),
        ),
        CaseSpec::single(
            Suite::User,
            "logout",
            ApiRequest::get("/user/logout"),
            Expectations::ok(),
        ),
    ]
}
