//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **memory**: process-local webinar store for tests and database-less runs
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM
//!
//! Adapters convert between domain types and storage representations. They
//! contain no business logic.

pub mod memory;
pub mod persistence;
