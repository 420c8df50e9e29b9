//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;
use serde_json::json;

use crate::domain::{
    EmailAddress, Error, NewUser, StoredCredentials, User, UserId, UserProfile,
};

/// Persistence errors raised by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserStoreError {
    /// Repository connection could not be established.
    #[error("user repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("user repository query failed: {message}")]
    Query { message: String },
    /// Another user already holds the requested email address.
    #[error("email address is already registered")]
    DuplicateEmail,
}

impl UserStoreError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

impl From<UserStoreError> for Error {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::Connection { message } => Error::service_unavailable(message),
            UserStoreError::Query { message } => Error::internal(message),
            UserStoreError::DuplicateEmail => Error::invalid_request(
                "email address is already registered",
            )
            .with_details(json!({ "field": "email", "code": "duplicate_email" })),
        }
    }
}

/// Repository port for user rows.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user and return it with its assigned identifier.
    async fn create(&self, new_user: NewUser) -> Result<User, UserStoreError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserStoreError>;

    /// Fetch a user by exact email match.
    async fn find_by_email(&self, email: &EmailAddress)
        -> Result<Option<User>, UserStoreError>;

    /// Fetch the credential projection for login, if the email is known.
    async fn credentials_by_email(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<StoredCredentials>, UserStoreError>;

    /// List every registered user.
    async fn list(&self) -> Result<Vec<User>, UserStoreError>;

    /// Overwrite a user's profile in place. Returns the updated user, or
    /// `None` when the id is unknown.
    async fn update_profile(
        &self,
        id: UserId,
        profile: &UserProfile,
    ) -> Result<Option<User>, UserStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case(UserStoreError::connection("refused"), ErrorCode::ServiceUnavailable)]
    #[case(UserStoreError::query("bad statement"), ErrorCode::InternalError)]
    #[case(UserStoreError::DuplicateEmail, ErrorCode::InvalidRequest)]
    fn store_errors_map_to_api_codes(#[case] error: UserStoreError, #[case] expected: ErrorCode) {
        let api: Error = error.into();
        assert_eq!(api.code, expected);
    }

    #[test]
    fn duplicate_email_carries_field_details() {
        let api: Error = UserStoreError::DuplicateEmail.into();
        let details = api.details.expect("details present");
        assert_eq!(details["field"], "email");
        assert_eq!(details["code"], "duplicate_email");
    }
}
