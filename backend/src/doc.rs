//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the webinar endpoints, the health probes, and the
//! request/response schemas. Swagger UI serves it in debug builds and
//! `cargo run --bin openapi-dump` exports it for external tooling.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::webinars::{ChangeSeatsBody, ChangeSeatsResponse, SeatsInput};

/// Register the caller identity header as a security scheme.
struct CallerHeaderAddon;

impl Modify for CallerHeaderAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "CallerHeader",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "X-User-Id",
                "Authenticated user forwarded by the gateway.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&CallerHeaderAddon),
    info(
        title = "Webinars API",
        description = "Seat management for webinars, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::webinars::change_seats,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(ChangeSeatsBody, ChangeSeatsResponse, SeatsInput, ErrorBody)),
    tags(
        (name = "webinars", description = "Webinar seat management"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
/// OpenAPI document for the REST API.
pub struct ApiDoc;
