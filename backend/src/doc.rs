//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct generating the OpenAPI specification for
//! the REST API: the login and invoice mutation paths, the shared error
//! and action-state schemas, and the session cookie security scheme.
//! Swagger UI serves the document in debug builds.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{ActionState, Error, ErrorCode, FormFields};
use crate::inbound::http::login::LoginRequest;

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
        title = "Invoice dashboard API",
        description = "Session-authenticated invoice mutations for the dashboard."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::login::login,
        crate::inbound::http::invoices::create_invoice,
        crate::inbound::http::invoices::update_invoice,
        crate::inbound::http::invoices::delete_invoice,
    ),
    components(schemas(Error, ErrorCode, ActionState, FormFields, LoginRequest)),
    tags(
        (name = "auth", description = "Session establishment"),
        (name = "invoices", description = "Invoice mutations")
    )
)]
pub struct ApiDoc;
