//! User API handlers: signup, login/logout, listing, profile view/update.
//!
//! ```text
//! POST /signup {"email":"ada@example.com","password":"...","name":"Ada",...}
//! POST /login {"email":"ada@example.com","password":"..."}
//! GET  /users
//! GET  /users/{id}
//! POST /users/{id}
//! ```
//!
//! Signup, login, and logout answer with a `303 See Other` redirect, as
//! the original application did; the profile update answers with the
//! serialized user.

use actix_web::http::header;
use actix_web::{get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::domain::auth::hash_password;
use crate::domain::{
    EmailAddress, Error, LoginCredentials, NewUser, User, UserId, UserProfile,
    UserProfileFields, UserValidationError,
};
use crate::inbound::http::auth::authenticate;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Signup request body for `POST /signup`. Every field is required.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub age: i32,
    pub phone: String,
    pub residency_address: String,
    pub zipcode: String,
    pub medications: String,
    pub allergies: String,
}

impl SignupRequest {
    fn into_profile_and_password(self) -> Result<(UserProfile, String), UserValidationError> {
        if self.password.is_empty() {
            return Err(UserValidationError::EmptyPassword);
        }
        let email = EmailAddress::new(self.email)?;
        let profile = UserProfile::new(UserProfileFields {
            email,
            name: self.name,
            age: self.age,
            phone: self.phone,
            residency_address: self.residency_address,
            zipcode: self.zipcode,
            medications: self.medications,
            allergies: self.allergies,
        })?;
        Ok((profile, self.password))
    }
}

/// Profile update body for `POST /users/{id}`. The same fields as signup,
/// minus the password, overwriting the row in place.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdateRequest {
    pub email: String,
    pub name: String,
    pub age: i32,
    pub phone: String,
    pub residency_address: String,
    pub zipcode: String,
    pub medications: String,
    pub allergies: String,
}

impl TryFrom<ProfileUpdateRequest> for UserProfile {
    type Error = UserValidationError;

    fn try_from(value: ProfileUpdateRequest) -> Result<Self, Self::Error> {
        let email = EmailAddress::new(value.email)?;
        UserProfile::new(UserProfileFields {
            email,
            name: value.name,
            age: value.age,
            phone: value.phone,
            residency_address: value.residency_address,
            zipcode: value.zipcode,
            medications: value.medications,
            allergies: value.allergies,
        })
    }
}

/// Login request body for `POST /login`.
#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

fn map_validation_error(err: UserValidationError) -> Error {
    let (field, code) = match &err {
        UserValidationError::EmptyEmail => ("email", "empty_email"),
        UserValidationError::InvalidEmail => ("email", "invalid_email"),
        UserValidationError::EmptyName => ("name", "empty_name"),
        UserValidationError::AgeOutOfRange { .. } => ("age", "age_out_of_range"),
        UserValidationError::EmptyPassword => ("password", "empty_password"),
    };
    Error::invalid_request(err.to_string()).with_details(json!({ "field": field, "code": code }))
}

fn see_other(location: impl AsRef<str>) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location.as_ref().to_owned()))
        .finish()
}

/// Register a new user.
#[utoipa::path(
    post,
    path = "/signup",
    request_body = SignupRequest,
    responses(
        (status = 303, description = "User created; redirects home"),
        (status = 400, description = "Invalid or duplicate fields", body = Error),
        (status = 500, description = "Internal server error")
    ),
    tags = ["users"],
    operation_id = "signup",
    security([])
)]
#[post("/signup")]
pub async fn signup(
    state: web::Data<HttpState>,
    payload: web::Json<SignupRequest>,
) -> ApiResult<HttpResponse> {
    let (profile, password) = payload
        .into_inner()
        .into_profile_and_password()
        .map_err(map_validation_error)?;
    let password_hash = hash_password(&password)?;

    let user = state
        .users
        .create(NewUser {
            profile,
            password_hash,
        })
        .await?;

    info!(user_id = %user.id, "user signed up");
    Ok(see_other("/"))
}

/// Authenticate and establish a session.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 303, description = "Logged in; redirects to the user's profile", headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Invalid credentials", body = Error),
        (status = 500, description = "Internal server error")
    ),
    tags = ["users"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let credentials = LoginCredentials::try_from_parts(body.email, body.password)
        .map_err(map_validation_error)?;

    let user_id = authenticate(state.users.as_ref(), &credentials).await?;
    session.persist_user(user_id)?;

    info!(%user_id, "user logged in");
    Ok(see_other(format!("/users/{user_id}")))
}

/// Clear the session. Safe to call when nobody is logged in.
#[utoipa::path(
    get,
    path = "/logout",
    responses((status = 303, description = "Session cleared; redirects home")),
    tags = ["users"],
    operation_id = "logout",
    security([])
)]
#[get("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.clear_user();
    see_other("/")
}

/// List every registered user.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users", body = [User]),
        (status = 500, description = "Internal server error")
    ),
    tags = ["users"],
    operation_id = "listUsers",
    security([])
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.list().await?;
    Ok(web::Json(users))
}

/// Fetch one user's profile.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = User),
        (status = 404, description = "No such user", body = Error),
        (status = 500, description = "Internal server error")
    ),
    tags = ["users"],
    operation_id = "getUser",
    security([])
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<User>> {
    let id = UserId::new(path.into_inner());
    let user = state
        .users
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("no such user"))?;
    Ok(web::Json(user))
}

/// Overwrite one user's profile and return the updated representation.
#[utoipa::path(
    post,
    path = "/users/{id}",
    params(("id" = i32, Path, description = "User identifier")),
    request_body = ProfileUpdateRequest,
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 400, description = "Invalid or duplicate fields", body = Error),
        (status = 404, description = "No such user", body = Error),
        (status = 500, description = "Internal server error")
    ),
    tags = ["users"],
    operation_id = "updateUser",
    security([])
)]
#[post("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<ProfileUpdateRequest>,
) -> ApiResult<web::Json<User>> {
    let id = UserId::new(path.into_inner());
    let profile = UserProfile::try_from(payload.into_inner()).map_err(map_validation_error)?;

    let user = state
        .users
        .update_profile(id, &profile)
        .await?
        .ok_or_else(|| Error::not_found("no such user"))?;

    info!(user_id = %user.id, "user profile updated");
    Ok(web::Json(user))
}
