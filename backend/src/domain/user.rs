//! User identity and profile model.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Validation errors raised while constructing user values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyEmail,
    InvalidEmail,
    EmptyName,
    AgeOutOfRange { max: i32 },
    EmptyPassword,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::InvalidEmail => write!(f, "email must contain an @ sign"),
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::AgeOutOfRange { max } => write!(f, "age must be between 0 and {max}"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Upper bound accepted for the age field.
pub const AGE_MAX: i32 = 150;

/// Stable user identifier backed by the database serial key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    /// Wrap a raw database identifier.
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    pub fn as_i32(self) -> i32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated email address.
///
/// ## Invariants
/// - non-empty with no surrounding whitespace
/// - contains an `@` sign
///
/// Login looks users up by exact string equality on this value, so no
/// normalisation beyond the checks above is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`].
    pub fn new(email: impl Into<String>) -> Result<Self, UserValidationError> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        if email.trim() != email || !email.contains('@') {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// The profile fields a user submits at signup and may overwrite later.
///
/// The password is deliberately absent: it travels separately on signup and
/// is never part of the profile representation returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[schema(value_type = String, example = "ada@example.com")]
    pub email: EmailAddress,
    pub name: String,
    pub age: i32,
    pub phone: String,
    pub residency_address: String,
    pub zipcode: String,
    pub medications: String,
    pub allergies: String,
}

/// Field bundle accepted by [`UserProfile::new`].
pub struct UserProfileFields {
    pub email: EmailAddress,
    pub name: String,
    pub age: i32,
    pub phone: String,
    pub residency_address: String,
    pub zipcode: String,
    pub medications: String,
    pub allergies: String,
}

impl UserProfile {
    /// Validate and construct a profile.
    ///
    /// Email validity is guaranteed by [`EmailAddress`]; this enforces the
    /// remaining rules: non-empty name and an age within `0..=AGE_MAX`.
    pub fn new(fields: UserProfileFields) -> Result<Self, UserValidationError> {
        if fields.name.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        if !(0..=AGE_MAX).contains(&fields.age) {
            return Err(UserValidationError::AgeOutOfRange { max: AGE_MAX });
        }
        Ok(Self {
            email: fields.email,
            name: fields.name,
            age: fields.age,
            phone: fields.phone,
            residency_address: fields.residency_address,
            zipcode: fields.zipcode,
            medications: fields.medications,
            allergies: fields.allergies,
        })
    }
}

/// Application user as returned to clients.
///
/// Serialises to a flat camelCase object: `{"id": 1, "email": ..., ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[schema(value_type = i32, example = 1)]
    pub id: UserId,
    #[serde(flatten)]
    pub profile: UserProfile,
}

impl User {
    /// Build a user from its identifier and validated profile.
    pub fn new(id: UserId, profile: UserProfile) -> Self {
        Self { id, profile }
    }
}

/// Data required to insert a user row.
pub struct NewUser {
    pub profile: UserProfile,
    /// Argon2id hash string, never the raw password.
    pub password_hash: String,
}

/// Credential projection used only by login.
#[derive(Debug, Clone)]
pub struct StoredCredentials {
    pub user_id: UserId,
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    //! Validation coverage for user value objects.
    use super::*;
    use rstest::rstest;

    fn profile_fields() -> UserProfileFields {
        UserProfileFields {
            email: EmailAddress::new("ada@example.com").expect("valid email"),
            name: "Ada Lovelace".into(),
            age: 36,
            phone: "415-555-0100".into(),
            residency_address: "12 Analytical Way".into(),
            zipcode: "94105".into(),
            medications: "none".into(),
            allergies: "penicillin".into(),
        }
    }

    #[rstest]
    #[case("", UserValidationError::EmptyEmail)]
    #[case("   ", UserValidationError::EmptyEmail)]
    #[case("no-at-sign", UserValidationError::InvalidEmail)]
    #[case(" padded@example.com", UserValidationError::InvalidEmail)]
    fn email_rejects_invalid_input(#[case] raw: &str, #[case] expected: UserValidationError) {
        assert_eq!(EmailAddress::new(raw).expect_err("must fail"), expected);
    }

    #[test]
    fn email_round_trips_through_serde() {
        let email = EmailAddress::new("ada@example.com").expect("valid email");
        let json = serde_json::to_string(&email).expect("serialise");
        assert_eq!(json, "\"ada@example.com\"");
        let back: EmailAddress = serde_json::from_str(&json).expect("deserialise");
        assert_eq!(back, email);
    }

    #[test]
    fn profile_rejects_blank_name() {
        let mut fields = profile_fields();
        fields.name = "  ".into();
        assert_eq!(
            UserProfile::new(fields).expect_err("must fail"),
            UserValidationError::EmptyName
        );
    }

    #[rstest]
    #[case(-1)]
    #[case(AGE_MAX + 1)]
    fn profile_rejects_out_of_range_age(#[case] age: i32) {
        let mut fields = profile_fields();
        fields.age = age;
        assert_eq!(
            UserProfile::new(fields).expect_err("must fail"),
            UserValidationError::AgeOutOfRange { max: AGE_MAX }
        );
    }

    #[test]
    fn user_serialises_flat_camel_case() {
        let profile = UserProfile::new(profile_fields()).expect("valid profile");
        let user = User::new(UserId::new(7), profile);
        let value = serde_json::to_value(&user).expect("serialise");
        assert_eq!(value["id"], 7);
        assert_eq!(value["email"], "ada@example.com");
        assert_eq!(value["residencyAddress"], "12 Analytical Way");
        assert!(value.get("residency_address").is_none());
        assert!(value.get("password").is_none());
    }
}
