//! Request-scoped trace identifier.
//!
//! The `Trace` middleware installs one identifier per request in Tokio
//! task-local storage; [`crate::domain::Error`] captures it so error payloads
//! and logs can be correlated. Spawned tasks do not inherit the scope.

use std::fmt;
use std::future::Future;
use std::str::FromStr;

use tokio::task_local;
use uuid::Uuid;

task_local! {
    static CURRENT: TraceId;
}

/// Header echoing the identifier on every response.
pub const TRACE_ID_HEADER: &str = "trace-id";

/// UUID identifying one HTTP request.
///
/// # Examples
/// ```
/// use webinars::domain::TraceId;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let trace_id = TraceId::from_header("6f1c2b8e-3f3a-4d55-9d0e-0b8a4a1f2c11")
///     .expect("valid UUID");
/// let seen = TraceId::scope(trace_id, async { TraceId::current() }).await;
/// assert_eq!(seen, Some(trace_id));
/// # });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceId(Uuid);

impl TraceId {
    /// Random v4 identifier for a new request.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Accept a caller-supplied header value.
    ///
    /// Surrounding whitespace is ignored. The nil UUID is refused so callers
    /// cannot collapse unrelated requests onto one identifier.
    #[must_use]
    pub fn from_header(raw: &str) -> Option<Self> {
        raw.trim()
            .parse::<Self>()
            .ok()
            .filter(|trace_id| !trace_id.0.is_nil())
    }

    /// Identifier of the enclosing request scope, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        CURRENT.try_with(|trace_id| *trace_id).ok()
    }

    /// Drive `fut` with `trace_id` installed as the current identifier.
    pub async fn scope<F: Future>(trace_id: Self, fut: F) -> F::Output {
        CURRENT.scope(trace_id, fut).await
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

impl FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}
