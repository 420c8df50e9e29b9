//! Emergency-contact API handlers.
//!
//! ```text
//! GET  /contacts
//! POST /contacts {"name":"Grace","kind":"mobile","phone":"202-555-0104"}
//! GET  /contacts/{id}
//! ```
//!
//! Listing and creation require a session and operate on the
//! authenticated user's contacts. Creation stays tolerant of absent
//! fields, storing empty strings, as the original form handler did. The
//! detail route performs no ownership check, also as the original did.

use actix_web::{get, post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{Contact, ContactId, Error, NewContact};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Contact creation body for `POST /contacts`.
///
/// Mirrors the original form contract: `name` labels the contact while
/// `kind` classifies the submitted phone number (e.g. `mobile`, `home`).
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub kind: Option<String>,
    pub phone: Option<String>,
}

/// List the authenticated user's contacts.
#[utoipa::path(
    get,
    path = "/contacts",
    responses(
        (status = 200, description = "Contacts with their phones", body = [Contact]),
        (status = 401, description = "Login required", body = Error),
        (status = 500, description = "Internal server error")
    ),
    tags = ["contacts"],
    operation_id = "listContacts"
)]
#[get("/contacts")]
pub async fn list_contacts(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<Contact>>> {
    let user_id = session.require_user_id()?;
    let contacts = state.contacts.list_for_user(user_id).await?;
    Ok(web::Json(contacts))
}

/// Create a contact plus its one phone for the authenticated user.
#[utoipa::path(
    post,
    path = "/contacts",
    request_body = ContactRequest,
    responses(
        (status = 201, description = "Created contact", body = Contact),
        (status = 401, description = "Login required", body = Error),
        (status = 500, description = "Internal server error")
    ),
    tags = ["contacts"],
    operation_id = "createContact"
)]
#[post("/contacts")]
pub async fn create_contact(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<ContactRequest>,
) -> ApiResult<HttpResponse> {
    let user_id = session.require_user_id()?;
    let body = payload.into_inner();

    let contact = state
        .contacts
        .create(NewContact {
            user_id,
            name: body.name.unwrap_or_default(),
            // The contact's own classification is never set by this route;
            // the submitted kind belongs to the phone.
            kind: String::new(),
            phone_number: body.phone.unwrap_or_default(),
            phone_kind: body.kind.unwrap_or_default(),
        })
        .await?;

    info!(contact_id = %contact.id, %user_id, "contact created");
    Ok(HttpResponse::Created().json(contact))
}

/// Fetch one contact with its phones.
#[utoipa::path(
    get,
    path = "/contacts/{id}",
    params(("id" = i32, Path, description = "Contact identifier")),
    responses(
        (status = 200, description = "Contact", body = Contact),
        (status = 404, description = "No such contact", body = Error),
        (status = 500, description = "Internal server error")
    ),
    tags = ["contacts"],
    operation_id = "getContact",
    security([])
)]
#[get("/contacts/{id}")]
pub async fn get_contact(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Contact>> {
    let id = ContactId::new(path.into_inner());
    let contact = state
        .contacts
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("no such contact"))?;
    Ok(web::Json(contact))
}
