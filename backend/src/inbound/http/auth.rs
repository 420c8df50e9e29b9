//! Authentication helpers used by HTTP handlers.
//!
//! Concentrates the credential check so handlers stay focused on
//! request/response mapping. Unknown email and wrong password produce the
//! same error, so responses never reveal which accounts exist.

use crate::domain::auth::verify_password;
use crate::domain::ports::UserRepository;
use crate::domain::{Error, LoginCredentials, UserId};

use super::ApiResult;

fn invalid_credentials() -> Error {
    Error::unauthorized("email or password is incorrect")
}

/// Verify credentials against the user store and return the user id.
pub async fn authenticate(
    users: &dyn UserRepository,
    credentials: &LoginCredentials,
) -> ApiResult<UserId> {
    let Some(stored) = users.credentials_by_email(credentials.email()).await? else {
        return Err(invalid_credentials());
    };

    if verify_password(credentials.password(), &stored.password_hash)? {
        Ok(stored.user_id)
    } else {
        Err(invalid_credentials())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::inbound::http::test_utils::InMemoryUserRepository;

    async fn repository_with_user() -> InMemoryUserRepository {
        let repository = InMemoryUserRepository::default();
        repository
            .seed_user("ada@example.com", "correct horse")
            .await;
        repository
    }

    fn credentials(email: &str, password: &str) -> LoginCredentials {
        LoginCredentials::try_from_parts(email, password).expect("valid credential shape")
    }

    #[tokio::test]
    async fn correct_credentials_authenticate() {
        let repository = repository_with_user().await;
        let id = authenticate(&repository, &credentials("ada@example.com", "correct horse"))
            .await
            .expect("authentication succeeds");
        assert_eq!(id.as_i32(), 1);
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_are_indistinguishable() {
        let repository = repository_with_user().await;

        let wrong_password =
            authenticate(&repository, &credentials("ada@example.com", "wrong"))
                .await
                .expect_err("wrong password fails");
        let unknown_email =
            authenticate(&repository, &credentials("nobody@example.com", "whatever"))
                .await
                .expect_err("unknown email fails");

        assert_eq!(wrong_password.code, ErrorCode::Unauthorized);
        assert_eq!(unknown_email.code, ErrorCode::Unauthorized);
        assert_eq!(wrong_password.message, unknown_email.message);
    }
}
