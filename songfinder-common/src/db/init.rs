//! Database initialization
//!
//! The song store is a single SQLite table used as a document collection:
//! each row holds one JSON song document keyed by its `song_id`.

use crate::db::models::SongDocument;
use crate::{Error, Result};
use serde_json::Value;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Initialize database connection and create tables if needed
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    sqlx::query("PRAGMA busy_timeout = 5000")
        .execute(&pool)
        .await?;

    create_songs_table(&pool).await?;

    Ok(pool)
}

/// Open a private in-memory database with the song schema
///
/// Limited to one connection that never expires: every SQLite in-memory
/// connection is a separate database.
pub async fn init_in_memory() -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None::<Duration>)
        .max_lifetime(None::<Duration>)
        .connect("sqlite::memory:")
        .await?;

    create_songs_table(&pool).await?;

    Ok(pool)
}

/// Create the songs collection (idempotent)
pub async fn create_songs_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS songs (
            song_id INTEGER PRIMARY KEY,
            document TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Insert or replace song documents, returning how many were written
pub async fn seed_songs(pool: &SqlitePool, songs: &[SongDocument]) -> Result<usize> {
    let mut tx = pool.begin().await?;

    for song in songs {
        let song_id = song.song_id().ok_or_else(|| {
            Error::InvalidRecord("document has no integer song_id".to_string())
        })?;
        let document = serde_json::to_string(song)?;

        sqlx::query("INSERT OR REPLACE INTO songs (song_id, document) VALUES (?, ?)")
            .bind(song_id)
            .bind(document)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    debug!("Seeded {} song documents", songs.len());

    Ok(songs.len())
}

/// Number of documents in the songs collection
pub async fn count_songs(pool: &SqlitePool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM songs")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Parse a dataset: a JSON array of song documents
pub fn parse_dataset(content: &str) -> Result<Vec<SongDocument>> {
    let value: Value = serde_json::from_str(content)?;
    let Value::Array(items) = value else {
        return Err(Error::InvalidInput(
            "dataset must be a JSON array of song documents".to_string(),
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            SongDocument::from_value(item).map_err(|e| {
                Error::InvalidInput(format!("dataset entry {}: {}", index, e))
            })
        })
        .collect()
}

/// Read and parse a dataset file
pub fn load_dataset(path: &Path) -> Result<Vec<SongDocument>> {
    let content = std::fs::read_to_string(path)?;
    parse_dataset(&content)
}
