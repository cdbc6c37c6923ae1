//! Error types for the top news service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Body detail returned for every server-side failure.
pub const GENERIC_FAILURE_DETAIL: &str = "Error fetching top news";

// == News Error Enum ==
/// Errors that abort a top-news request.
///
/// Failures of individual item lookups are not errors; they are dropped
/// from the result instead.
#[derive(Error, Debug)]
pub enum NewsError {
    /// The ranking list could not be fetched (non-success status or unreachable)
    #[error("Failed to fetch top stories: {message}")]
    UpstreamList {
        status: Option<u16>,
        message: String,
    },

    /// Invalid query parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Anything else that went wrong while aggregating
    #[error("Internal error: {0}")]
    Internal(String),
}

impl NewsError {
    /// Status code returned by the ranking endpoint, when there was one.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            NewsError::UpstreamList { status, .. } => *status,
            _ => None,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for NewsError {
    fn into_response(self) -> Response {
        // Upstream detail stays in the logs; callers only see the generic message
        let (status, detail) = match self {
            NewsError::InvalidRequest(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            NewsError::UpstreamList { .. } | NewsError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                GENERIC_FAILURE_DETAIL.to_string(),
            ),
        };

        (status, Json(ErrorResponse::new(detail))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the service.
pub type Result<T> = std::result::Result<T, NewsError>;
