//! Shared helper utilities for backend integration tests.
//!
//! Integration tests compile as separate crates under `backend/tests/`, so
//! each suite pulls in the helpers it needs with `mod support;`. Suites that
//! need PostgreSQL also include `support/postgres.rs` and `support/pg_embed.rs`.

use chrono::{TimeZone, Utc};
use webinars::domain::{UserId, Webinar, WebinarId, WebinarProps};

/// Webinar organized by `organizer` with a fixed one-hour slot.
pub fn sample_webinar(id: &str, organizer: &str, seats: u32) -> Webinar {
    Webinar::new(WebinarProps {
        id: WebinarId::new(id).expect("valid webinar id"),
        organizer_id: UserId::new(organizer).expect("valid user id"),
        title: "Webinar title".to_owned(),
        start_date: Utc
            .with_ymd_and_hms(2023, 1, 1, 0, 0, 0)
            .single()
            .expect("valid timestamp"),
        end_date: Utc
            .with_ymd_and_hms(2023, 1, 1, 1, 0, 0)
            .single()
            .expect("valid timestamp"),
        seats,
    })
}
