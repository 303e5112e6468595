//! Process settings loaded via OrthoConfig.
//!
//! Values come from command-line flags and `WEBINARS_*` environment variables.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::{IdentifierValidationError, UserId};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// `bind_addr` is not a socket address.
    #[error("invalid bind address {value:?}: {message}")]
    BindAddr {
        /// Raw configured value.
        value: String,
        /// Parser diagnostic.
        message: String,
    },
    /// `fallback_user_id` is not a valid user identifier.
    #[error("invalid fallback user id: {0}")]
    FallbackUser(#[from] IdentifierValidationError),
}

/// Runtime settings for the webinar service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "WEBINARS")]
pub struct AppSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection string. Without it webinars live in memory.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Apply embedded migrations before serving.
    #[ortho_config(default = false)]
    pub run_migrations: bool,
    /// Caller identity assumed when requests omit `X-User-Id`.
    pub fallback_user_id: Option<String>,
}

impl AppSettings {
    /// Resolve the bind address, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|err: std::net::AddrParseError| SettingsError::BindAddr {
            value: raw.to_owned(),
            message: err.to_string(),
        })
    }

    /// Pool size, defaulting to 10.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }

    /// Validated fallback identity, if configured.
    pub fn fallback_user(&self) -> Result<Option<UserId>, SettingsError> {
        self.fallback_user_id
            .as_deref()
            .map(UserId::new)
            .transpose()
            .map_err(SettingsError::from)
    }
}
