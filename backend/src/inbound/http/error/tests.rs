//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::unauthorized("no"), StatusCode::UNAUTHORIZED)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

async fn render(error: Error) -> (StatusCode, Option<String>, ErrorBody) {
    let response = ResponseError::error_response(&error);
    let status = response.status();
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .map(|value| value.to_str().expect("ascii header").to_owned());
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = serde_json::from_slice(&bytes).expect("error body deserialises");
    (status, header, body)
}

#[rstest]
#[actix_web::test]
async fn client_errors_keep_message_and_details(expected_trace_id: String) {
    let error = Error::invalid_request("Webinar seats cannot be reduced")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({"code": "reduce_seats"}));

    let (status, header, body) = render(error).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(header.as_deref(), Some(expected_trace_id.as_str()));
    assert_eq!(body.error, "Webinar seats cannot be reduced");
    assert_eq!(body.details, Some(json!({"code": "reduce_seats"})));
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(expected_trace_id: String) {
    let error = Error::internal("webinar repository error: relation missing")
        .with_trace_id(expected_trace_id)
        .with_details(json!({"secret": "x"}));

    let (status, header, body) = render(error).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(header.is_some());
    assert_eq!(body.error, "Internal server error");
    assert!(body.details.is_none());
}

#[rstest]
#[actix_web::test]
async fn unavailable_errors_hide_connection_details() {
    let error = Error::service_unavailable("webinar repository unavailable: 10.0.0.3 refused");

    let (status, _, body) = render(error).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(!body.error.contains("10.0.0.3"));
}

#[rstest]
#[actix_web::test]
async fn error_without_trace_id_omits_trace_header() {
    let (_, header, body) = render(Error::not_found("Webinar not found")).await;
    assert!(header.is_none());
    assert_eq!(
        body,
        ErrorBody {
            error: "Webinar not found".to_owned(),
            details: None,
        }
    );
}

#[rstest]
fn body_without_details_serialises_error_only() {
    let body = body_for(&Error::unauthorized("User is not allowed to update this webinar"));
    let value = serde_json::to_value(body).expect("serialise body");
    assert_eq!(
        value,
        json!({"error": "User is not allowed to update this webinar"})
    );
}
