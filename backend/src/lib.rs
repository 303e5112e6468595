//! Webinar seat management service.
//!
//! Hexagonal layout: [`domain`] holds the aggregate, ports, and use case;
//! [`inbound`] adapts HTTP requests onto the ports; [`outbound`] implements
//! the repository port in memory and on PostgreSQL.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
