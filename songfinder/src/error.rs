//! Error types for the song finder
//!
//! `SongFinderError` is the domain error raised by the controller and passed
//! unchanged through the boundary. Only the HTTP layer turns it into a status.

use thiserror::Error;

use crate::entity::EntityError;

/// Domain error for song lookups
#[derive(Error, Debug)]
pub enum SongFinderError {
    /// Neither the id nor the name lookup produced a record
    #[error("song {query} not found")]
    NotFound { query: String },

    /// The store returned a document that is not a valid song
    #[error("invalid song record: {0}")]
    InvalidRecord(#[from] EntityError),

    /// The store itself failed
    #[error("store error: {0}")]
    Store(#[from] songfinder_common::Error),
}

impl SongFinderError {
    pub fn not_found(query: impl Into<String>) -> Self {
        Self::NotFound {
            query: query.into(),
        }
    }
}

/// Convenience Result type for lookups
pub type Result<T> = std::result::Result<T, SongFinderError>;
