//! Webinar aggregate.
//!
//! The entity is a plain mutable record. It performs no validation: business
//! rules live in the use cases that mutate it, and persistence adapters are
//! expected to hand it already-valid data.

use std::fmt;

use chrono::{DateTime, Utc};

use super::user::{IdentifierValidationError, UserId, validate_identifier};

/// Opaque webinar identifier.
///
/// # Examples
/// ```
/// use webinars::domain::WebinarId;
///
/// let id = WebinarId::new("webinar-1").expect("valid id");
/// assert_eq!(id.to_string(), "webinar-1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WebinarId(String);

impl WebinarId {
    /// Validate and construct a [`WebinarId`].
    pub fn new(id: impl Into<String>) -> Result<Self, IdentifierValidationError> {
        let id = id.into();
        validate_identifier(&id)?;
        Ok(Self(id))
    }
}

impl AsRef<str> for WebinarId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for WebinarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Full property set of a webinar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebinarProps {
    /// Stable identifier, fixed at creation.
    pub id: WebinarId,
    /// User allowed to change the webinar.
    pub organizer_id: UserId,
    /// Display title.
    pub title: String,
    /// Scheduled start.
    pub start_date: DateTime<Utc>,
    /// Scheduled end.
    pub end_date: DateTime<Utc>,
    /// Seat capacity.
    pub seats: u32,
}

/// Partial update accepted by [`Webinar::update`].
///
/// Only the title and the seat count may change after creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebinarUpdate {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement seat capacity.
    pub seats: Option<u32>,
}

impl WebinarUpdate {
    /// Update that only touches the seat count.
    #[must_use]
    pub fn seats(seats: u32) -> Self {
        Self {
            seats: Some(seats),
            ..Self::default()
        }
    }
}

/// Webinar aggregate.
///
/// ## Invariants
/// - `id` and `organizer_id` never change after construction; there is no
///   mutable access to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Webinar {
    props: WebinarProps,
}

impl Webinar {
    /// Construct a webinar from its full property set.
    #[must_use]
    pub fn new(props: WebinarProps) -> Self {
        Self { props }
    }

    /// Merge the mutable fields present in `update` into the current state.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use webinars::domain::{UserId, Webinar, WebinarId, WebinarProps, WebinarUpdate};
    ///
    /// let mut webinar = Webinar::new(WebinarProps {
    ///     id: WebinarId::new("w1").expect("id"),
    ///     organizer_id: UserId::new("alice").expect("id"),
    ///     title: "Rust for organizers".to_owned(),
    ///     start_date: Utc::now(),
    ///     end_date: Utc::now(),
    ///     seats: 100,
    /// });
    /// webinar.update(WebinarUpdate::seats(200));
    /// assert_eq!(webinar.seats(), 200);
    /// ```
    pub fn update(&mut self, update: WebinarUpdate) {
        let WebinarUpdate { title, seats } = update;
        if let Some(title) = title {
            self.props.title = title;
        }
        if let Some(seats) = seats {
            self.props.seats = seats;
        }
    }

    /// Read access to the full property set.
    #[must_use]
    pub fn props(&self) -> &WebinarProps {
        &self.props
    }

    /// Consume the aggregate and return its properties.
    #[must_use]
    pub fn into_props(self) -> WebinarProps {
        self.props
    }

    /// Stable identifier.
    #[must_use]
    pub fn id(&self) -> &WebinarId {
        &self.props.id
    }

    /// Organizer of the webinar.
    #[must_use]
    pub fn organizer_id(&self) -> &UserId {
        &self.props.organizer_id
    }

    /// Display title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.props.title.as_str()
    }

    /// Scheduled start.
    #[must_use]
    pub fn start_date(&self) -> DateTime<Utc> {
        self.props.start_date
    }

    /// Scheduled end.
    #[must_use]
    pub fn end_date(&self) -> DateTime<Utc> {
        self.props.end_date
    }

    /// Current seat capacity.
    #[must_use]
    pub fn seats(&self) -> u32 {
        self.props.seats
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use chrono::TimeZone;
    use rstest::{fixture, rstest};

    #[fixture]
    fn webinar() -> Webinar {
        Webinar::new(WebinarProps {
            id: WebinarId::new("webinar-1").expect("valid id"),
            organizer_id: UserId::new("organizer-1").expect("valid id"),
            title: "My Webinar".to_owned(),
            start_date: Utc
                .with_ymd_and_hms(2024, 1, 10, 10, 0, 0)
                .single()
                .expect("valid timestamp"),
            end_date: Utc
                .with_ymd_and_hms(2024, 1, 10, 11, 0, 0)
                .single()
                .expect("valid timestamp"),
            seats: 100,
        })
    }

    #[rstest]
    fn update_merges_title_and_seats(mut webinar: Webinar) {
        let before = webinar.clone();
        webinar.update(WebinarUpdate {
            title: Some("Updated title".to_owned()),
            seats: Some(250),
        });

        assert_eq!(webinar.title(), "Updated title");
        assert_eq!(webinar.seats(), 250);
        assert_eq!(webinar.id(), before.id());
        assert_eq!(webinar.organizer_id(), before.organizer_id());
        assert_eq!(webinar.start_date(), before.start_date());
        assert_eq!(webinar.end_date(), before.end_date());
    }

    #[rstest]
    fn empty_update_is_a_no_op(mut webinar: Webinar) {
        let before = webinar.clone();
        webinar.update(WebinarUpdate::default());
        assert_eq!(webinar, before);
    }

    #[rstest]
    fn update_does_not_validate(mut webinar: Webinar) {
        webinar.update(WebinarUpdate::seats(0));
        assert_eq!(webinar.seats(), 0);
    }

    #[rstest]
    fn webinar_id_rejects_blank_input() {
        assert_eq!(WebinarId::new(""), Err(IdentifierValidationError::Empty));
    }
}
