//! SQLite-backed song store
//!
//! Documents live as JSON text in `songs.document`; title lookups go through
//! `json_extract` so the table behaves like a document collection.

use async_trait::async_trait;
use songfinder_common::db::init_database;
use songfinder_common::{NameMatch, Result, SongDocument};
use sqlx::SqlitePool;
use std::path::Path;
use tracing::debug;

use crate::repository::SongStore;

#[derive(Debug, Clone)]
pub struct SqliteSongStore {
    pool: SqlitePool,
}

impl SqliteSongStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if needed) the database file and wrap it
    pub async fn open(db_path: &Path) -> Result<Self> {
        Ok(Self::new(init_database(db_path).await?))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn decode(document: Option<String>) -> Result<Option<SongDocument>> {
    Ok(document
        .map(|text| serde_json::from_str::<SongDocument>(&text))
        .transpose()?)
}

#[async_trait]
impl SongStore for SqliteSongStore {
    async fn find_by_id(&self, song_id: i64) -> Result<Option<SongDocument>> {
        debug!(song_id, "sqlite lookup by id");

        let document: Option<String> =
            sqlx::query_scalar("SELECT document FROM songs WHERE song_id = ?")
                .bind(song_id)
                .fetch_optional(&self.pool)
                .await?;

        decode(document)
    }

    async fn find_by_title(&self, title: &str, mode: NameMatch) -> Result<Option<SongDocument>> {
        debug!(title, ?mode, "sqlite lookup by title");

        match mode {
            NameMatch::Exact => {
                let document: Option<String> = sqlx::query_scalar(
                    "SELECT document FROM songs
                     WHERE json_extract(document, '$.title') = ?
                     ORDER BY song_id ASC
                     LIMIT 1",
                )
                .bind(title)
                .fetch_optional(&self.pool)
                .await?;

                decode(document)
            }
            NameMatch::Substring => {
                // SQLite lower() folds ASCII only, so case folding happens here
                let titled: Vec<(String, String)> = sqlx::query_as(
                    "SELECT json_extract(document, '$.title'), document FROM songs
                     WHERE json_type(document, '$.title') = 'text'
                     ORDER BY song_id ASC",
                )
                .fetch_all(&self.pool)
                .await?;

                let document = titled
                    .into_iter()
                    .find(|(stored, _)| mode.matches(stored, title))
                    .map(|(_, document)| document);

                decode(document)
            }
        }
    }
}
