//! Outcome of a single URL resolution.
//!
//! A `ResolveUrlResult` is what a client's resolve hook receives back: the
//! body text (when any could be decoded), a success flag and the HTTP status.
//! Failures are encoded here instead of being raised.

use serde::{Deserialize, Serialize};

use crate::error::ResolveError;

/// Status reported when the transaction failed before any HTTP status was received.
pub const TRANSPORT_FAILURE_STATUS: i64 = -1;

/// Result handed back to the client for one resolved URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveUrlResult {
    /// Response body as UTF-8 text. `None` if no body was received or it did not decode.
    pub resolved_data: Option<String>,
    /// True iff the server answered 2xx and the body decoded.
    pub success: bool,
    /// HTTP status of the final response, or [`TRANSPORT_FAILURE_STATUS`].
    pub status_code: i64,
}

impl ResolveUrlResult {
    /// Build a result from a received response whose body decoded cleanly.
    ///
    /// The body is kept for error statuses as well; only the flag reflects the status.
    pub fn from_response(status: u32, body: String) -> Self {
        Self {
            resolved_data: Some(body),
            success: is_success_status(status),
            status_code: i64::from(status),
        }
    }

    /// Result for a transaction that never produced a status (DNS, connect, timeout, bad URL).
    pub fn transport_failure() -> Self {
        Self {
            resolved_data: None,
            success: false,
            status_code: TRANSPORT_FAILURE_STATUS,
        }
    }

    /// Fold a resolver error into a result value.
    pub fn from_error(err: &ResolveError) -> Self {
        match err.status() {
            Some(status) => Self {
                resolved_data: None,
                success: false,
                status_code: i64::from(status),
            },
            None => Self::transport_failure(),
        }
    }

    pub fn is_transport_failure(&self) -> bool {
        self.status_code == TRANSPORT_FAILURE_STATUS
    }
}

/// 2xx check used for the success flag.
pub fn is_success_status(status: u32) -> bool {
    (200..300).contains(&status)
}
