//! Driving port for changing the seat capacity of a webinar.

use async_trait::async_trait;
use serde_json::json;

use crate::domain::{Error, User, UserId, WebinarId};

use super::WebinarRepositoryError;

/// Request to change the seat count of a webinar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeSeatsRequest {
    /// Identity of the caller asking for the change.
    pub user_id: UserId,
    /// Webinar whose capacity changes.
    pub webinar_id: WebinarId,
    /// Requested seat count.
    pub seats: u32,
}

impl ChangeSeatsRequest {
    /// Build a request on behalf of `user`.
    #[must_use]
    pub fn for_user(user: &User, webinar_id: WebinarId, seats: u32) -> Self {
        Self {
            user_id: user.id().clone(),
            webinar_id,
            seats,
        }
    }
}

/// Failures of the change-seats use case.
///
/// The first four variants are business-rule violations and are never
/// retried. Repository failures are passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChangeSeatsError {
    /// No webinar exists for the requested identifier.
    #[error("Webinar not found")]
    WebinarNotFound {
        /// Identifier that matched nothing.
        webinar_id: WebinarId,
    },
    /// The caller does not organize the webinar.
    #[error("User is not allowed to update this webinar")]
    WebinarNotOrganizer {
        /// Webinar the caller tried to change.
        webinar_id: WebinarId,
        /// Caller that is not the organizer.
        user_id: UserId,
    },
    /// The requested capacity does not exceed the current one.
    #[error("Webinar seats cannot be reduced")]
    WebinarReduceSeats {
        /// Stored seat count.
        current: u32,
        /// Seat count asked for.
        requested: u32,
    },
    /// The requested capacity exceeds the platform ceiling.
    #[error("Webinar cannot have more than {max} seats")]
    WebinarTooManySeats {
        /// Highest accepted seat count.
        max: u32,
        /// Seat count asked for.
        requested: u32,
    },
    /// The backing store failed.
    #[error(transparent)]
    Persistence(#[from] WebinarRepositoryError),
}

impl From<ChangeSeatsError> for Error {
    fn from(error: ChangeSeatsError) -> Self {
        let message = error.to_string();
        match error {
            ChangeSeatsError::WebinarNotFound { .. } => Self::not_found(message),
            ChangeSeatsError::WebinarNotOrganizer { .. } => Self::unauthorized(message),
            ChangeSeatsError::WebinarReduceSeats { current, requested } => {
                Self::invalid_request(message).with_details(json!({
                    "code": "reduce_seats",
                    "currentSeats": current,
                    "requestedSeats": requested,
                }))
            }
            ChangeSeatsError::WebinarTooManySeats { max, requested } => {
                Self::invalid_request(message).with_details(json!({
                    "code": "too_many_seats",
                    "maxSeats": max,
                    "requestedSeats": requested,
                }))
            }
            ChangeSeatsError::Persistence(WebinarRepositoryError::Connection { message }) => {
                Self::service_unavailable(format!("webinar repository unavailable: {message}"))
            }
            ChangeSeatsError::Persistence(WebinarRepositoryError::Query { message }) => {
                Self::internal(format!("webinar repository error: {message}"))
            }
        }
    }
}

/// Use-case port the HTTP adapter depends on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChangeSeatsCommand: Send + Sync {
    /// Change the seat count of a webinar on behalf of the requesting user.
    async fn execute(&self, request: ChangeSeatsRequest) -> Result<(), ChangeSeatsError>;
}

/// Fixture implementation that accepts every request without storing it.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureChangeSeatsCommand;

#[async_trait]
impl ChangeSeatsCommand for FixtureChangeSeatsCommand {
    async fn execute(&self, _request: ChangeSeatsRequest) -> Result<(), ChangeSeatsError> {
        Ok(())
    }
}
