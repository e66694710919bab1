//! # Song Finder Common Library
//!
//! Shared code for the song finder service:
//! - Error type used by the store and configuration layers
//! - Bootstrap configuration (TOML file + root folder resolution)
//! - Stored song document model
//! - SQLite document database initialization and dataset seeding

pub mod config;
pub mod db;
pub mod error;

pub use config::{NameMatch, NotFoundStatus};
pub use db::SongDocument;
pub use error::{Error, Result};
