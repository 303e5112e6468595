//! Domain primitives, aggregates, and use cases.
//!
//! Purpose: define the webinar aggregate, the identities that act on it, and
//! the change-seats use case. Types here know nothing about HTTP or SQL;
//! adapters reach them through [`ports`].
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport-agnostic failure payload.
//! - Webinar (alias to `webinar::Webinar`): the webinar aggregate.
//! - ChangeSeats (alias to `change_seats::ChangeSeats`): seat-change service.

pub mod change_seats;
pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod webinar;

pub use self::change_seats::{ChangeSeats, MAX_SEATS};
pub use self::error::{Error, ErrorCode};
pub use self::ports::{ChangeSeatsError, ChangeSeatsRequest};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{IdentifierValidationError, User, UserId};
pub use self::webinar::{Webinar, WebinarId, WebinarProps, WebinarUpdate};
