//! Port abstraction for webinar persistence adapters and their errors.
//!
//! Adapters are selected at process wiring: the in-memory adapter backs tests
//! and database-less runs, the Diesel adapter backs PostgreSQL deployments.

use async_trait::async_trait;

use crate::domain::{Webinar, WebinarId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by webinar repository adapters.
    ///
    /// Storage-level failures such as a duplicate id on create or a missing
    /// row on update surface as [`WebinarRepositoryError::Query`]; they are
    /// not translated into domain errors here.
    pub enum WebinarRepositoryError {
        /// Repository connection could not be established.
        Connection {
            /// Driver or pool diagnostic.
            message: String,
        } => "webinar repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query {
            /// Driver diagnostic or adapter description.
            message: String,
        } => "webinar repository query failed: {message}",
    }
}

/// Storage contract for the webinar aggregate.
///
/// Every operation may suspend on I/O. No locking discipline is offered:
/// concurrent updates of the same webinar are last-writer-wins.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WebinarRepository: Send + Sync {
    /// Persist a new webinar. Fails when the identifier is already taken.
    async fn create(&self, webinar: &Webinar) -> Result<(), WebinarRepositoryError>;

    /// Fetch a webinar by identifier.
    ///
    /// Returns `Ok(None)` when no webinar matches; absence is not an error.
    async fn find_by_id(&self, id: &WebinarId) -> Result<Option<Webinar>, WebinarRepositoryError>;

    /// Persist the mutable fields of an existing webinar.
    ///
    /// Fails when no webinar with the same identifier exists.
    async fn update(&self, webinar: &Webinar) -> Result<(), WebinarRepositoryError>;
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn query_error_formats_message() {
        let error = WebinarRepositoryError::query("webinar w1 not found for update");
        assert_eq!(
            error.to_string(),
            "webinar repository query failed: webinar w1 not found for update"
        );
    }

    #[rstest]
    fn connection_error_formats_message() {
        let error = WebinarRepositoryError::connection("connection refused");
        assert!(error.to_string().contains("connection refused"));
        assert!(matches!(error, WebinarRepositoryError::Connection { .. }));
    }
}
