//! In-memory song store

use async_trait::async_trait;
use songfinder_common::db::parse_dataset;
use std::collections::BTreeMap;
use songfinder_common::{NameMatch, Result, SongDocument};

use crate::repository::SongStore;

/// Read-only store over a fixed set of documents, ordered by `song_id`
///
/// `song_id` is unique: a later document replaces an earlier one with the
/// same id, as seeding does in the SQLite store.
#[derive(Debug, Clone, Default)]
pub struct MemorySongStore {
    songs: Vec<SongDocument>,
}

impl MemorySongStore {
    pub fn new(songs: Vec<SongDocument>) -> Self {
        let by_id: BTreeMap<i64, SongDocument> = songs
            .into_iter()
            .filter_map(|song| song.song_id().map(|id| (id, song)))
            .collect();
        Self {
            songs: by_id.into_values().collect(),
        }
    }

    /// Build from a dataset in the same JSON format the service seeds from
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(Self::new(parse_dataset(content)?))
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}

#[async_trait]
impl SongStore for MemorySongStore {
    async fn find_by_id(&self, song_id: i64) -> Result<Option<SongDocument>> {
        Ok(self
            .songs
            .iter()
            .find(|song| song.song_id() == Some(song_id))
            .cloned())
    }

    async fn find_by_title(&self, title: &str, mode: NameMatch) -> Result<Option<SongDocument>> {
        Ok(self
            .songs
            .iter()
            .find(|song| song.title().is_some_and(|stored| mode.matches(stored, title)))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_documents_are_ordered_by_id() {
        let store = MemorySongStore::from_json(
            r#"[
                {"song_id": 9, "title": "Imagine", "artist": "A Perfect Circle"},
                {"song_id": 2, "title": "Imagine", "artist": "John Lennon"}
            ]"#,
        )
        .unwrap();

        assert_eq!(store.len(), 2);
        let song = store
            .find_by_title("Imagine", NameMatch::Exact)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(song.song_id(), Some(2));
    }

    #[tokio::test]
    async fn test_duplicate_id_keeps_last_document() {
        let store = MemorySongStore::from_json(
            r#"[
                {"song_id": 4, "title": "Hey Jude", "artist": "The Beatles"},
                {"song_id": 4, "title": "Let It Be", "artist": "The Beatles"}
            ]"#,
        )
        .unwrap();

        assert_eq!(store.len(), 1);
        let song = store.find_by_id(4).await.unwrap().unwrap();
        assert_eq!(song.title(), Some("Let It Be"));
        assert!(store
            .find_by_title("Hey Jude", NameMatch::Exact)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_substring_folds_non_ascii_case() {
        let store = MemorySongStore::from_json(
            r#"[{"song_id": 1, "title": "Été indien", "artist": "Joe Dassin"}]"#,
        )
        .unwrap();

        let song = store
            .find_by_title("ÉTÉ", NameMatch::Substring)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(song.song_id(), Some(1));
    }

    #[tokio::test]
    async fn test_empty_store_finds_nothing() {
        let store = MemorySongStore::default();
        assert!(store.is_empty());
        assert!(store.find_by_id(1).await.unwrap().is_none());
        assert!(store
            .find_by_title("x", NameMatch::Substring)
            .await
            .unwrap()
            .is_none());
    }
}
