//! Home endpoint.
//!
//! The original served a rendered index page; rendering is out of scope
//! here, so the root answers with a small service banner.

use actix_web::{get, web};
use serde::Serialize;
use utoipa::ToSchema;

/// Service banner returned from `GET /`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceBanner {
    #[schema(example = "disaster-alert")]
    pub service: String,
    pub version: String,
}

/// Home page.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service banner", body = ServiceBanner)),
    tags = ["home"],
    operation_id = "home",
    security([])
)]
#[get("/")]
pub async fn index() -> web::Json<ServiceBanner> {
    web::Json(ServiceBanner {
        service: "disaster-alert".to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
    })
}
