//! Song lookup endpoints
//!
//! `POST /songs` takes `{"name": ...}`; `GET /songs/:query` takes the query
//! from the path. Both run the same boundary call and error mapping.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    routing::{get, post},
    Json, Router,
};
use tracing::debug;

use super::error::{ApiError, ApiResult};
use crate::boundary::find_song;
use crate::entity::{SongRequest, SongResponse};
use crate::AppState;

/// POST /songs
pub async fn find_song_endpoint(
    State(state): State<AppState>,
    payload: Result<Json<SongRequest>, JsonRejection>,
) -> ApiResult<Json<SongResponse>> {
    let Json(request) = payload.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    lookup(&state, request).await
}

/// GET /songs/:query
pub async fn find_song_by_path(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<SongResponse>> {
    let Path(query) = path.map_err(|e| ApiError::InvalidRequest(e.body_text()))?;
    let request = SongRequest::new(query).map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
    lookup(&state, request).await
}

async fn lookup(state: &AppState, request: SongRequest) -> ApiResult<Json<SongResponse>> {
    debug!(query = request.name(), "song lookup");

    find_song(&state.controller, &request)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_finder(e, state.not_found_status))
}

/// Build song lookup routes
pub fn song_routes() -> Router<AppState> {
    Router::new()
        .route("/songs", post(find_song_endpoint))
        .route("/songs/:query", get(find_song_by_path))
}
