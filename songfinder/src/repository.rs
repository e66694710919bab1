//! Song repository
//!
//! The only component that talks to the backing store. The store handle is
//! injected through [`SongRepository::new`]; [`SongRepository::connect`] is
//! the default factory opening the SQLite document store.

use async_trait::async_trait;
use songfinder_common::{NameMatch, Result, SongDocument};
use std::path::Path;
use std::sync::Arc;

use crate::db::SqliteSongStore;

/// Read access to the `songs` collection
///
/// Absence is `Ok(None)`. When several documents match, the one with the
/// lowest `song_id` is returned.
#[async_trait]
pub trait SongStore: Send + Sync + 'static {
    /// Document whose `song_id` equals `song_id`
    async fn find_by_id(&self, song_id: i64) -> Result<Option<SongDocument>>;

    /// Document whose title matches `title` under `mode`
    async fn find_by_title(&self, title: &str, mode: NameMatch) -> Result<Option<SongDocument>>;
}

/// Point lookups over an injected song store
#[derive(Clone)]
pub struct SongRepository {
    store: Arc<dyn SongStore>,
    name_match: NameMatch,
}

impl SongRepository {
    /// Create a repository over the given store, using exact name matching
    pub fn new(store: Arc<dyn SongStore>) -> Self {
        Self {
            store,
            name_match: NameMatch::Exact,
        }
    }

    /// Open the SQLite document store at `db_path`
    pub async fn connect(db_path: &Path) -> Result<Self> {
        let store = SqliteSongStore::open(db_path).await?;
        Ok(Self::new(Arc::new(store)))
    }

    pub fn with_name_match(mut self, name_match: NameMatch) -> Self {
        self.name_match = name_match;
        self
    }

    pub fn name_match(&self) -> NameMatch {
        self.name_match
    }

    /// Searches a song with exactly the given id
    pub async fn find_by_id(&self, song_id: i64) -> Result<Option<SongDocument>> {
        self.store.find_by_id(song_id).await
    }

    /// Searches a song by title using the configured match mode
    pub async fn find_by_name(&self, name: &str) -> Result<Option<SongDocument>> {
        self.store.find_by_title(name, self.name_match).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemorySongStore;

    fn repository() -> SongRepository {
        let store = MemorySongStore::from_json(
            r#"[
                {"song_id": 3, "title": "You are the sunshine of my life", "artist": "Stevie Wonder"},
                {"song_id": 6, "title": "Superstition", "artist": "Stevie Wonder", "year": 1972}
            ]"#,
        )
        .unwrap();
        SongRepository::new(Arc::new(store))
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let song = repository().find_by_id(6).await.unwrap().unwrap();
        assert_eq!(song.title(), Some("Superstition"));
        assert!(repository().find_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_default_name_match_is_exact() {
        let repo = repository();
        assert_eq!(repo.name_match(), NameMatch::Exact);
        assert!(repo.find_by_name("sunshine").await.unwrap().is_none());
        assert!(repo.find_by_name("Superstition").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_substring_mode() {
        let repo = repository().with_name_match(NameMatch::Substring);
        let song = repo.find_by_name("SUNSHINE").await.unwrap().unwrap();
        assert_eq!(song.song_id(), Some(3));
    }
}
