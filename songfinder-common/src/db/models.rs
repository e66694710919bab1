//! Database models

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A song record as persisted in the `songs` collection
///
/// Documents are schemaless JSON objects. The only field the store relies on
/// is an integer `song_id`; `title`, `artist` and `year` are checked when the
/// record is mapped to a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SongDocument(Map<String, Value>);

impl SongDocument {
    /// Build a document from a JSON value, requiring an object with an
    /// integer `song_id`
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => {
                let doc = Self(fields);
                if doc.song_id().is_none() {
                    return Err(Error::InvalidRecord(
                        "document has no integer song_id".to_string(),
                    ));
                }
                Ok(doc)
            }
            other => Err(Error::InvalidRecord(format!(
                "expected a JSON object, got {}",
                other
            ))),
        }
    }

    /// Raw field access
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn song_id(&self) -> Option<i64> {
        self.get("song_id").and_then(Value::as_i64)
    }

    pub fn title(&self) -> Option<&str> {
        self.get("title").and_then(Value::as_str)
    }
}
