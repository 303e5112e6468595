//! Shared HTTP adapter state.
//!
//! Handlers receive this state via `actix_web::web::Data` so they depend only
//! on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::UserId;
use crate::domain::ports::{ChangeSeatsCommand, FixtureChangeSeatsCommand};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Driving port for seat changes.
    pub change_seats: Arc<dyn ChangeSeatsCommand>,
    /// Identity assumed when a request carries no `X-User-Id` header.
    pub fallback_user: Option<UserId>,
}

impl HttpState {
    /// Construct state from the change-seats port with no fallback identity.
    pub fn new(change_seats: Arc<dyn ChangeSeatsCommand>) -> Self {
        Self {
            change_seats,
            fallback_user: None,
        }
    }

    /// Attach the identity used when the caller header is absent.
    #[must_use]
    pub fn with_fallback_user(mut self, user: Option<UserId>) -> Self {
        self.fallback_user = user;
        self
    }
}

impl Default for HttpState {
    fn default() -> Self {
        Self::new(Arc::new(FixtureChangeSeatsCommand))
    }
}
