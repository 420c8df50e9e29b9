//! Password hashing and login credentials.
//!
//! The original data set stored plaintext passwords; this module replaces
//! that with salted argon2id hashes. Verification failure and unknown email
//! are indistinguishable to callers so login cannot enumerate accounts.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::domain::{EmailAddress, Error, UserValidationError};

/// Hash a password with argon2id and a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, Error> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| Error::internal(format!("failed to hash password: {err}")))
}

/// Verify a password against a stored hash string.
///
/// An unparsable stored hash is a server-side data defect, not a wrong
/// password, and surfaces as an internal error.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, Error> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|err| Error::internal(format!("stored password hash is invalid: {err}")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Validated login input: an email plus a non-empty password.
#[derive(Debug, Clone)]
pub struct LoginCredentials {
    email: EmailAddress,
    password: String,
}

impl LoginCredentials {
    /// Validate and construct credentials from raw request parts.
    pub fn try_from_parts(
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let email = EmailAddress::new(email)?;
        let password = password.into();
        if password.is_empty() {
            return Err(UserValidationError::EmptyPassword);
        }
        Ok(Self { email, password })
    }

    /// Email the user claims to own.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Raw password to verify against the stored hash.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}
