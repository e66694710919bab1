//! Request and response entities
//!
//! Shapes exchanged across the boundary. Both are validated on construction:
//! a request needs a non-empty name, and a response can only be built from a
//! stored document carrying `song_id`, `title` and `artist`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use songfinder_common::SongDocument;
use thiserror::Error;

/// Entity validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntityError {
    #[error("song request name must not be empty")]
    EmptyName,

    #[error("song record is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("song record field `{0}` has the wrong type")]
    InvalidField(&'static str),
}

/// A lookup query: either a decimal song id or a title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSongRequest")]
pub struct SongRequest {
    name: String,
}

impl SongRequest {
    pub fn new(name: impl Into<String>) -> Result<Self, EntityError> {
        let name = name.into();
        if name.is_empty() {
            return Err(EntityError::EmptyName);
        }
        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Wire form of a request; `name` may arrive as a string or a bare integer
#[derive(Deserialize)]
struct RawSongRequest {
    name: RawName,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawName {
    Text(String),
    Number(u64),
}

impl TryFrom<RawSongRequest> for SongRequest {
    type Error = EntityError;

    fn try_from(raw: RawSongRequest) -> Result<Self, Self::Error> {
        match raw.name {
            RawName::Text(name) => Self::new(name),
            RawName::Number(id) => Self::new(id.to_string()),
        }
    }
}

/// A song as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongResponse {
    pub song_id: i64,
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub year: Option<i64>,
}

impl SongResponse {
    pub fn new(
        song_id: i64,
        title: impl Into<String>,
        artist: impl Into<String>,
        year: Option<i64>,
    ) -> Self {
        Self {
            song_id,
            title: title.into(),
            artist: artist.into(),
            year,
        }
    }
}

impl TryFrom<&SongDocument> for SongResponse {
    type Error = EntityError;

    fn try_from(doc: &SongDocument) -> Result<Self, Self::Error> {
        let song_id = required(doc, "song_id")?
            .as_i64()
            .ok_or(EntityError::InvalidField("song_id"))?;
        let title = required(doc, "title")?
            .as_str()
            .ok_or(EntityError::InvalidField("title"))?;
        let artist = required(doc, "artist")?
            .as_str()
            .ok_or(EntityError::InvalidField("artist"))?;
        let year = match doc.get("year") {
            None | Some(Value::Null) => None,
            Some(value) => Some(value.as_i64().ok_or(EntityError::InvalidField("year"))?),
        };

        Ok(Self::new(song_id, title, artist, year))
    }
}

fn required<'a>(doc: &'a SongDocument, field: &'static str) -> Result<&'a Value, EntityError> {
    match doc.get(field) {
        None | Some(Value::Null) => Err(EntityError::MissingField(field)),
        Some(value) => Ok(value),
    }
}
