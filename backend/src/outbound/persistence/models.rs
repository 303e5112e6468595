//! Internal Diesel row structs for database operations.
//!
//! These types never leave the persistence layer.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::webinars;

/// Row struct for reading from the webinars table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = webinars)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct WebinarRow {
    pub id: String,
    pub organizer_id: String,
    pub title: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub seats: i32,
}

/// Insertable struct for creating new webinar records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = webinars)]
pub(crate) struct NewWebinarRow<'a> {
    pub id: &'a str,
    pub organizer_id: &'a str,
    pub title: &'a str,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub seats: i32,
}

/// Changeset for the mutable webinar columns.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = webinars)]
pub(crate) struct WebinarChangeset<'a> {
    pub title: &'a str,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub seats: i32,
}
