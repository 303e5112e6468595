//! Builders wiring repository adapters into the HTTP state.

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};

use webinars::domain::ChangeSeats;
use webinars::domain::ports::ChangeSeatsCommand;
use webinars::inbound::http::state::HttpState;
use webinars::outbound::memory::InMemoryWebinarRepository;
use webinars::outbound::persistence::{DbPool, DieselWebinarRepository};

/// Pick the webinar repository: Diesel when a pool is configured, otherwise
/// a process-local store.
pub(super) fn build_change_seats(pool: Option<&DbPool>) -> Arc<dyn ChangeSeatsCommand> {
    match pool {
        Some(pool) => {
            info!("webinar repository: postgres");
            Arc::new(ChangeSeats::new(Arc::new(DieselWebinarRepository::new(
                pool.clone(),
            ))))
        }
        None => {
            warn!("webinar repository: in-memory, data is lost on restart");
            Arc::new(ChangeSeats::new(Arc::new(
                InMemoryWebinarRepository::default(),
            )))
        }
    }
}

pub(super) fn build_http_state(config: &super::ServerConfig) -> web::Data<HttpState> {
    let change_seats = build_change_seats(config.db_pool.as_ref());
    web::Data::new(
        HttpState::new(change_seats).with_fallback_user(config.fallback_user.clone()),
    )
}
