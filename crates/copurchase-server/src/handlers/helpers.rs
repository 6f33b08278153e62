//! Shared handler helpers for the co-purchase REST API.

use axum::{http::StatusCode, Json};
use copurchase_core::Error;

use crate::types::ErrorResponse;

/// Error half of every handler result.
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Map a core error to an HTTP error response.
///
/// `NodeNotFound` becomes 404. Load errors cannot occur once the server is
/// running, but are reported as 500 without leaking parser details.
pub fn api_error(err: &Error) -> ApiError {
    match err {
        Error::NodeNotFound(_) => {
            tracing::warn!(error = %err, "Requested node does not exist");
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
        }
        Error::Parse(_) => {
            tracing::error!(error = %err, "Internal server error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "internal error".to_string(),
                }),
            )
        }
    }
}
