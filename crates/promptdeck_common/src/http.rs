// --- File: crates/promptdeck_common/src/http.rs ---
use std::fmt;

use axum::http::StatusCode;
use tracing::{error, warn};

use crate::error::HttpStatusCode;

pub mod client;

/// Turns any handler error into a `(message, status)` pair.
///
/// The error is always logged. Unless `detailed` is set the caller only sees
/// the canonical reason phrase of the status, e.g. `Bad Gateway`.
pub fn normalize_error<E>(err: &E, detailed: bool) -> (String, StatusCode)
where
    E: HttpStatusCode + fmt::Display,
{
    let status = StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    if status.is_server_error() {
        error!(status = status.as_u16(), "Request failed: {}", err);
    } else {
        warn!(status = status.as_u16(), "Request rejected: {}", err);
    }

    let message = if detailed {
        err.to_string()
    } else {
        status
            .canonical_reason()
            .unwrap_or("Internal Server Error")
            .to_string()
    };

    (message, status)
}
