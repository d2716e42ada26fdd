//! User account payloads

use serde::{Deserialize, Serialize};

/// A pet-store user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User identifier.
    pub id: i64,
    /// Login name, also used as the resource key in user endpoints.
    pub username: String,
    /// Given name.
    #[serde(default)]
    pub first_name: String,
    /// Family name.
    #[serde(default)]
    pub last_name: String,
    /// Contact email address.
    #[serde(default)]
    pub email: String,
    /// Account password.
    #[serde(default)]
    pub password: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: String,
    /// Numeric account status flag.
    #[serde(default)]
    pub user_status: i32,
}

impl User {
    /// Creates a user with the given id and username; all other fields
    /// start empty.
    #[must_use]
    pub fn new(id: i64, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            password: String::new(),
            phone: String::new(),
            user_status: 0,
        }
    }

    /// Sets the given and family names.
    #[must_use]
    pub fn with_name(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = first.into();
        self.last_name = last.into();
        self
    }

    /// Sets the email address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the password.
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Sets the phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Sets the account status flag.
    #[must_use]
    pub const fn with_user_status(mut self, user_status: i32) -> Self {
        self.user_status = user_status;
        self
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn user_serializes_with_camel_case_fields() {
        let user = User::new(1001, "testuser")
            .with_name("Test", "User")
            .with_email("testuser@example.com")
            .with_password("password123")
            .with_phone("555-0100")
            .with_user_status(1);
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["id"], 1001);
        assert_eq!(json["username"], "testuser");
        assert_eq!(json["firstName"], "Test");
        assert_eq!(json["lastName"], "User");
        assert_eq!(json["email"], "testuser@example.com");
        assert_eq!(json["password"], "password123");
        assert_eq!(json["userStatus"], 1);
    }

    #[test]
    fn user_deserializes_with_missing_optional_fields() {
        let user: User = serde_json::from_str(r#"{"id":5,"username":"ghost"}"#).unwrap();
        assert_eq!(user.username, "ghost");
        assert_eq!(user.first_name, "");
        assert_eq!(user.user_status, 0);
    }
}
