//! HTTP server configuration object.

use std::net::SocketAddr;

use webinars::domain::UserId;
use webinars::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) fallback_user: Option<UserId>,
}

impl ServerConfig {
    /// Configuration binding `bind_addr` with in-memory storage.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            fallback_user: None,
        }
    }

    /// Attach a database pool. Without one webinars are kept in memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: Option<DbPool>) -> Self {
        self.db_pool = pool;
        self
    }

    /// Identity assumed for requests without an `X-User-Id` header.
    #[must_use]
    pub fn with_fallback_user(mut self, user: Option<UserId>) -> Self {
        self.fallback_user = user;
        self
    }
}
