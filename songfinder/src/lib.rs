//! Song finder library
//!
//! Looks up a song by numeric id or by title. Layers, outermost first:
//! HTTP API → boundary → controller → repository → song store.

use axum::Router;
use chrono::{DateTime, Utc};
use songfinder_common::NotFoundStatus;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod boundary;
pub mod controller;
pub mod db;
pub mod entity;
pub mod error;
pub mod repository;

pub use controller::SongController;
pub use entity::{SongRequest, SongResponse};
pub use error::SongFinderError;
pub use repository::{SongRepository, SongStore};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Lookup controller over the injected repository
    pub controller: Arc<SongController>,
    /// Status sent when no song matches (422 unless configured as 404)
    pub not_found_status: NotFoundStatus,
    /// Service startup timestamp for uptime reporting
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    /// Create new application state
    pub fn new(controller: SongController) -> Self {
        Self {
            controller: Arc::new(controller),
            not_found_status: NotFoundStatus::default(),
            startup_time: Utc::now(),
        }
    }

    pub fn with_not_found_status(mut self, status: NotFoundStatus) -> Self {
        self.not_found_status = status;
        self
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::health_routes())
        .merge(api::song_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
