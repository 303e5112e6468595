//! Webinar HTTP handlers.
//!
//! ```text
//! POST /webinars/{id}/seats
//! ```

use actix_web::{HttpRequest, error::JsonPayloadError, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::ports::ChangeSeatsRequest;
use crate::domain::{Error, WebinarId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::caller::Caller;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;

/// Seat count as sent by clients: a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(untagged)]
pub enum SeatsInput {
    /// JSON integer, possibly negative.
    Integer(i64),
    /// JSON number with a fractional part.
    Float(f64),
    /// Numeric string such as `"30"`.
    Text(String),
}

/// Request payload for changing the seat count.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct ChangeSeatsBody {
    /// Requested seat count.
    #[schema(example = 200)]
    pub seats: SeatsInput,
}

/// Success payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChangeSeatsResponse {
    /// Human-readable confirmation.
    #[schema(example = "Seats updated")]
    pub message: String,
}

fn invalid_seats(value: serde_json::Value) -> Error {
    Error::invalid_request("seats must be a non-negative integer").with_details(json!({
        "field": "seats",
        "value": value,
        "code": "invalid_seats",
    }))
}

fn parse_seats(input: SeatsInput) -> Result<u32, Error> {
    match input {
        SeatsInput::Integer(value) => u32::try_from(value).map_err(|_| invalid_seats(json!(value))),
        SeatsInput::Float(value) => {
            if value.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&value) {
                #[expect(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    reason = "range and integrality checked above"
                )]
                Ok(value as u32)
            } else {
                Err(invalid_seats(json!(value)))
            }
        }
        SeatsInput::Text(raw) => raw
            .trim()
            .parse::<u32>()
            .map_err(|_| invalid_seats(json!(raw))),
    }
}

fn parse_webinar_id(raw: String) -> Result<WebinarId, Error> {
    WebinarId::new(raw.as_str()).map_err(|err| {
        Error::invalid_request("webinar id is not valid").with_details(json!({
            "field": "id",
            "reason": err.to_string(),
            "code": "invalid_webinar_id",
        }))
    })
}

/// Render body deserialisation failures with the standard error envelope.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        let message = match &err {
            JsonPayloadError::ContentType => "request body must be JSON".to_owned(),
            JsonPayloadError::Deserialize(inner) if inner.is_data() => {
                "seats must be a non-negative integer".to_owned()
            }
            other => format!("invalid request body: {other}"),
        };
        Error::invalid_request(message)
            .with_details(json!({ "code": "invalid_body" }))
            .into()
    })
}

/// Increase the seat capacity of a webinar organized by the caller.
#[utoipa::path(
    post,
    path = "/webinars/{id}/seats",
    request_body = ChangeSeatsBody,
    params(
        ("id" = String, Path, description = "Webinar identifier"),
        ("X-User-Id" = Option<String>, Header, description = "Authenticated caller")
    ),
    responses(
        (status = 200, description = "Seats updated", body = ChangeSeatsResponse),
        (status = 400, description = "Invalid seat count or rule violation", body = ErrorBody),
        (status = 401, description = "Caller unknown or not the organizer", body = ErrorBody),
        (status = 404, description = "Webinar not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody),
        (status = 503, description = "Storage unavailable", body = ErrorBody)
    ),
    tags = ["webinars"],
    operation_id = "changeWebinarSeats"
)]
#[post("/webinars/{id}/seats")]
pub async fn change_seats(
    state: web::Data<HttpState>,
    caller: Caller,
    path: web::Path<String>,
    payload: web::Json<ChangeSeatsBody>,
) -> ApiResult<web::Json<ChangeSeatsResponse>> {
    let webinar_id = parse_webinar_id(path.into_inner())?;
    let seats = parse_seats(payload.into_inner().seats)?;

    state
        .change_seats
        .execute(ChangeSeatsRequest {
            user_id: caller.into_user_id(),
            webinar_id,
            seats,
        })
        .await?;

    Ok(web::Json(ChangeSeatsResponse {
        message: "Seats updated".to_owned(),
    }))
}

#[cfg(test)]
#[path = "webinars_tests.rs"]
mod tests;
