//! PostgreSQL-backed `WebinarRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{WebinarRepository, WebinarRepositoryError};
use crate::domain::{UserId, Webinar, WebinarId, WebinarProps};

use super::models::{NewWebinarRow, WebinarChangeset, WebinarRow};
use super::pool::{DbPool, PoolError};
use super::schema::webinars;

/// Diesel-backed implementation of the `WebinarRepository` port.
#[derive(Clone)]
pub struct DieselWebinarRepository {
    pool: DbPool,
}

impl DieselWebinarRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> WebinarRepositoryError {
    WebinarRepositoryError::connection(error.into_message())
}

fn map_diesel_error(error: diesel::result::Error) -> WebinarRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => WebinarRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => WebinarRepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            WebinarRepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            WebinarRepositoryError::query("webinar already exists")
        }
        DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, _) => {
            WebinarRepositoryError::query("webinar violates a table constraint")
        }
        _ => WebinarRepositoryError::query("database error"),
    }
}

fn seats_for_db(seats: u32) -> Result<i32, WebinarRepositoryError> {
    i32::try_from(seats)
        .map_err(|_| WebinarRepositoryError::query(format!("seat count {seats} out of range")))
}

/// Convert a stored row into the aggregate, rejecting rows the domain cannot
/// represent.
fn row_to_webinar(row: WebinarRow) -> Result<Webinar, WebinarRepositoryError> {
    let invalid = |field: &str, detail: String| {
        WebinarRepositoryError::query(format!(
            "stored webinar {} has invalid {field}: {detail}",
            row.id
        ))
    };

    let id = WebinarId::new(row.id.clone()).map_err(|err| invalid("id", err.to_string()))?;
    let organizer_id = UserId::new(row.organizer_id.clone())
        .map_err(|err| invalid("organizer_id", err.to_string()))?;
    let seats = u32::try_from(row.seats).map_err(|err| invalid("seats", err.to_string()))?;

    Ok(Webinar::new(WebinarProps {
        id,
        organizer_id,
        title: row.title,
        start_date: row.start_date,
        end_date: row.end_date,
        seats,
    }))
}

#[async_trait]
impl WebinarRepository for DieselWebinarRepository {
    async fn create(&self, webinar: &Webinar) -> Result<(), WebinarRepositoryError> {
        let new_row = NewWebinarRow {
            id: webinar.id().as_ref(),
            organizer_id: webinar.organizer_id().as_ref(),
            title: webinar.title(),
            start_date: webinar.start_date(),
            end_date: webinar.end_date(),
            seats: seats_for_db(webinar.seats())?,
        };

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(webinars::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_by_id(&self, id: &WebinarId) -> Result<Option<Webinar>, WebinarRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<WebinarRow> = webinars::table
            .filter(webinars::id.eq(id.as_ref()))
            .select(WebinarRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_webinar).transpose()
    }

    async fn update(&self, webinar: &Webinar) -> Result<(), WebinarRepositoryError> {
        let changeset = WebinarChangeset {
            title: webinar.title(),
            start_date: webinar.start_date(),
            end_date: webinar.end_date(),
            seats: seats_for_db(webinar.seats())?,
        };

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let updated_rows = diesel::update(webinars::table)
            .filter(webinars::id.eq(webinar.id().as_ref()))
            .set(&changeset)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if updated_rows == 0 {
            return Err(WebinarRepositoryError::query(format!(
                "webinar {} not found for update",
                webinar.id()
            )));
        }
        Ok(())
    }
}
