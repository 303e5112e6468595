//! HTTP inbound adapter exposing REST endpoints.

pub mod caller;
pub mod error;
pub mod health;
pub mod state;
pub mod webinars;

pub use error::ApiResult;

use actix_web::web;

/// Register the webinar endpoints, the health probes, and the JSON body
/// configuration on an application or scope.
///
/// Callers still provide `web::Data<HttpState>` and `web::Data<HealthState>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(webinars::json_config())
        .service(webinars::change_seats)
        .service(health::ready)
        .service(health::live);
}
