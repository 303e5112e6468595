//! Change-seats use case.
//!
//! Guards are evaluated in a fixed order and the first failure wins: the
//! webinar must exist, the caller must organize it, the seat count must grow,
//! and the result must stay within [`MAX_SEATS`]. The repository is only
//! written once every guard has passed.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{
    ChangeSeatsCommand, ChangeSeatsError, ChangeSeatsRequest, WebinarRepository,
};
use crate::domain::{Webinar, WebinarUpdate};

/// Upper bound on the seat count of any webinar.
pub const MAX_SEATS: u32 = 1000;

/// Change-seats service implementing the driving port.
#[derive(Clone)]
pub struct ChangeSeats<R> {
    webinar_repo: Arc<R>,
}

impl<R> ChangeSeats<R> {
    /// Create a new service backed by `webinar_repo`.
    pub fn new(webinar_repo: Arc<R>) -> Self {
        Self { webinar_repo }
    }
}

impl<R> ChangeSeats<R>
where
    R: WebinarRepository,
{
    fn check_rules(webinar: &Webinar, request: &ChangeSeatsRequest) -> Result<(), ChangeSeatsError> {
        if webinar.organizer_id() != &request.user_id {
            return Err(ChangeSeatsError::WebinarNotOrganizer {
                webinar_id: request.webinar_id.clone(),
                user_id: request.user_id.clone(),
            });
        }

        // Equal counts are not an increase.
        if request.seats <= webinar.seats() {
            return Err(ChangeSeatsError::WebinarReduceSeats {
                current: webinar.seats(),
                requested: request.seats,
            });
        }

        if request.seats > MAX_SEATS {
            return Err(ChangeSeatsError::WebinarTooManySeats {
                max: MAX_SEATS,
                requested: request.seats,
            });
        }

        Ok(())
    }

    async fn apply(&self, request: &ChangeSeatsRequest) -> Result<(), ChangeSeatsError> {
        let Some(mut webinar) = self.webinar_repo.find_by_id(&request.webinar_id).await? else {
            return Err(ChangeSeatsError::WebinarNotFound {
                webinar_id: request.webinar_id.clone(),
            });
        };

        Self::check_rules(&webinar, request)?;

        let previous = webinar.seats();
        webinar.update(WebinarUpdate::seats(request.seats));
        self.webinar_repo.update(&webinar).await?;

        info!(
            webinar_id = %request.webinar_id,
            previous_seats = previous,
            seats = request.seats,
            "webinar seats changed"
        );
        Ok(())
    }
}

#[async_trait]
impl<R> ChangeSeatsCommand for ChangeSeats<R>
where
    R: WebinarRepository,
{
    async fn execute(&self, request: ChangeSeatsRequest) -> Result<(), ChangeSeatsError> {
        self.apply(&request).await.inspect_err(|error| {
            debug!(
                webinar_id = %request.webinar_id,
                user_id = %request.user_id,
                requested_seats = request.seats,
                %error,
                "change seats rejected"
            );
        })
    }
}

#[cfg(test)]
#[path = "change_seats_tests.rs"]
mod tests;
