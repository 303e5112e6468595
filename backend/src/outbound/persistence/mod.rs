//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations translate between Diesel rows and domain types
//! and contain no business logic. Row structs (`models.rs`) and the table
//! definitions (`schema.rs`) stay private to this module. Connections come
//! from a `bb8` pool driven by `diesel-async`.
//!
//! # Example
//!
//! ```ignore
//! use webinars::outbound::persistence::{DbPool, DieselWebinarRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/webinars")).await?;
//! let repo = DieselWebinarRepository::new(pool);
//! ```

mod diesel_webinar_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_webinar_repository::DieselWebinarRepository;
pub use migrations::{
    MIGRATIONS, MigrationError, run_pending_migrations, run_pending_migrations_blocking,
};
pub use pool::{DbPool, PoolConfig, PoolError};
