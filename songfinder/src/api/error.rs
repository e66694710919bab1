//! HTTP error mapping
//!
//! The single place where domain errors become status codes. Details are
//! logged server-side; clients only ever see a generic `message`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use songfinder_common::NotFoundStatus;
use thiserror::Error;
use tracing::{error, warn};

use crate::error::SongFinderError;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// No song matched the query (422, or 404 when configured)
    #[error("Song not found: {query}")]
    NotFound { query: String, status: StatusCode },

    /// Request body or path could not be turned into a song request (422)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Store or data failure (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Map a domain error, using `not_found_status` for missing songs
    pub fn from_finder(err: SongFinderError, not_found_status: NotFoundStatus) -> Self {
        match err {
            SongFinderError::NotFound { query } => ApiError::NotFound {
                query,
                status: status_code(not_found_status),
            },
            other => ApiError::Internal(other.to_string()),
        }
    }
}

fn status_code(status: NotFoundStatus) -> StatusCode {
    match status {
        NotFoundStatus::UnprocessableEntity => StatusCode::UNPROCESSABLE_ENTITY,
        NotFoundStatus::NotFound => StatusCode::NOT_FOUND,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::NotFound { status, .. } => {
                warn!("{}", self);
                (*status, "No song matched the query")
            }
            ApiError::InvalidRequest(_) => {
                warn!("{}", self);
                (StatusCode::UNPROCESSABLE_ENTITY, "Invalid song request")
            }
            ApiError::Internal(_) => {
                error!("{}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
