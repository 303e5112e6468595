//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations` exactly. `diesel print-schema` regenerates
//! this file from a migrated database.

diesel::table! {
    /// Webinars and their seat capacity.
    webinars (id) {
        /// Opaque webinar identifier.
        id -> Text,
        /// Identifier of the organizing user.
        organizer_id -> Text,
        title -> Text,
        start_date -> Timestamptz,
        end_date -> Timestamptz,
        /// Seat capacity; the table rejects negative values.
        seats -> Int4,
    }
}
