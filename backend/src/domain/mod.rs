//! Domain entities, value objects, and ports.
//!
//! Purpose: define the strongly typed model shared by the HTTP adapter and
//! the persistence layer. Types here are transport and storage agnostic;
//! invariants and serialisation contracts (serde) are documented on each
//! type's Rustdoc.
//!
//! Public surface:
//! - `Error` / `ErrorCode` — API error response payload and stable codes.
//! - `User`, `UserProfile`, `EmailAddress` — user identity and profile.
//! - `Contact`, `Phone` — emergency-contact aggregate.
//! - `Earthquake`, `Alert` — read-only natural-disaster records.
//! - `ports` — repository traits implemented by outbound adapters.

pub mod auth;
pub mod contact;
pub mod disaster;
pub mod error;
pub mod ports;
pub mod user;

pub use self::auth::LoginCredentials;
pub use self::contact::{Contact, ContactId, NewContact, Phone};
pub use self::disaster::{Alert, DisasterId, Earthquake};
pub use self::error::{Error, ErrorCode};
pub use self::user::{
    EmailAddress, NewUser, StoredCredentials, User, UserId, UserProfile, UserProfileFields,
    UserValidationError,
};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("no such record"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
