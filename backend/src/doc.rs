//! OpenAPI documentation configuration.
//!
//! Defines [`ApiDoc`], the generated OpenAPI specification for the REST
//! API: every HTTP endpoint from the inbound layer, the domain schemas
//! they reference, and the session-cookie security scheme. Swagger UI
//! serves the document in debug builds.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Alert, Contact, Earthquake, Error, ErrorCode, Phone, User, UserProfile};
use crate::inbound::http::contacts::ContactRequest;
use crate::inbound::http::home::ServiceBanner;
use crate::inbound::http::users::{LoginRequest, ProfileUpdateRequest, SignupRequest};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Disaster alert API",
        description = "Users, emergency contacts, and earthquake records over session-authenticated HTTP."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::home::index,
        crate::inbound::http::users::signup,
        crate::inbound::http::users::login,
        crate::inbound::http::users::logout,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::contacts::list_contacts,
        crate::inbound::http::contacts::create_contact,
        crate::inbound::http::contacts::get_contact,
        crate::inbound::http::earthquakes::list_earthquakes,
        crate::inbound::http::earthquakes::get_earthquake,
        crate::inbound::http::settings::update_setting,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        User,
        UserProfile,
        Contact,
        Phone,
        Earthquake,
        Alert,
        Error,
        ErrorCode,
        ServiceBanner,
        SignupRequest,
        ProfileUpdateRequest,
        LoginRequest,
        ContactRequest,
    )),
    tags(
        (name = "home", description = "Service banner"),
        (name = "users", description = "Signup, login, and profile management"),
        (name = "contacts", description = "Emergency contacts"),
        (name = "earthquakes", description = "Read-only earthquake records"),
        (name = "settings", description = "Unimplemented settings endpoint"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated document covers the HTTP surface.

    use super::*;
    use utoipa::OpenApi;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/",
            "/signup",
            "/login",
            "/logout",
            "/users",
            "/users/{id}",
            "/contacts",
            "/contacts/{id}",
            "/earthquakes",
            "/earthquakes/{id}",
            "/settings/{code}",
            "/health/ready",
            "/health/live",
        ] {
            assert!(
                doc.paths.paths.contains_key(path),
                "missing path {path} in OpenAPI document"
            );
        }
    }

    #[test]
    fn error_schema_is_registered_with_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        assert!(schemas.contains_key("Error"));
        assert!(schemas.contains_key("User"));
        assert!(schemas.contains_key("Earthquake"));
    }
}
