//! HTTP API handlers for the song finder

pub mod error;
pub mod health;
pub mod songs;

pub use error::{ApiError, ApiResult};
pub use health::health_routes;
pub use songs::song_routes;
