//! Caller identity extraction.
//!
//! Authentication happens upstream of this service. The gateway forwards the
//! authenticated user in the `X-User-Id` header; deployments without a
//! gateway may configure a fallback identity instead.

use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::{Ready, ready};
use serde_json::json;
use tracing::debug;

use crate::domain::{Error, UserId};
use crate::inbound::http::state::HttpState;

/// Header carrying the authenticated caller.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Identity of the user issuing the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller(pub UserId);

impl Caller {
    /// Borrow the resolved identity.
    #[must_use]
    pub fn user_id(&self) -> &UserId {
        &self.0
    }

    /// Take ownership of the resolved identity.
    #[must_use]
    pub fn into_user_id(self) -> UserId {
        self.0
    }
}

fn invalid_header(reason: impl std::fmt::Display) -> Error {
    Error::invalid_request("X-User-Id header is not a valid user id").with_details(json!({
        "field": "X-User-Id",
        "reason": reason.to_string(),
        "code": "invalid_user_id",
    }))
}

fn resolve(req: &HttpRequest) -> Result<Caller, Error> {
    if let Some(raw) = req.headers().get(USER_ID_HEADER) {
        let value = raw.to_str().map_err(invalid_header)?;
        return UserId::new(value).map(Caller).map_err(invalid_header);
    }

    let fallback = req
        .app_data::<web::Data<HttpState>>()
        .and_then(|state| state.fallback_user.clone());
    match fallback {
        Some(user_id) => {
            debug!(%user_id, "no caller header, using fallback identity");
            Ok(Caller(user_id))
        }
        None => Err(Error::unauthorized("caller identity required")),
    }
}

impl FromRequest for Caller {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(resolve(req))
    }
}
