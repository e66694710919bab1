//! Boundary tests against the SQLite document store
//!
//! Exercises the full lookup path below HTTP: boundary → controller →
//! repository → SqliteSongStore, with the bundled dataset seeded into a
//! private in-memory database.

use songfinder::boundary::find_song;
use songfinder::db::SqliteSongStore;
use songfinder::{SongController, SongFinderError, SongRepository, SongRequest, SongResponse};
use songfinder_common::db::{init_in_memory, parse_dataset, seed_songs};
use std::sync::Arc;

const DATASET: &str = include_str!("../data/songs.json");

async fn setup_controller() -> SongController {
    let pool = init_in_memory().await.expect("in-memory database");
    let songs = parse_dataset(DATASET).expect("bundled dataset parses");
    seed_songs(&pool, &songs).await.expect("seed songs");

    let repository = SongRepository::new(Arc::new(SqliteSongStore::new(pool)));
    SongController::new(repository)
}

fn song_response() -> SongResponse {
    SongResponse::new(3, "You are the sunshine of my life", "Stevie Wonder", None)
}

#[tokio::test]
async fn test_find_song_by_id() {
    let controller = setup_controller().await;
    let request = SongRequest::new("3").unwrap();

    assert_eq!(find_song(&controller, &request).await.unwrap(), song_response());
}

#[tokio::test]
async fn test_find_song_by_name() {
    let controller = setup_controller().await;
    let request = SongRequest::new("You are the sunshine of my life").unwrap();

    assert_eq!(find_song(&controller, &request).await.unwrap(), song_response());
}

#[tokio::test]
async fn test_find_song_with_year() {
    let controller = setup_controller().await;
    let song = find_song(&controller, &SongRequest::new("Hey Jude").unwrap())
        .await
        .unwrap();

    assert_eq!(song, SongResponse::new(4, "Hey Jude", "The Beatles", Some(1968)));
}

#[tokio::test]
async fn test_find_song_error() {
    let controller = setup_controller().await;
    let err = find_song(&controller, &SongRequest::new("999").unwrap())
        .await
        .unwrap_err();

    match err {
        SongFinderError::NotFound { query } => assert_eq!(query, "999"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_connect_opens_file_database() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("songfinder.db");

    let repository = SongRepository::connect(&db_path).await.unwrap();

    assert!(db_path.exists());
    assert!(repository.find_by_id(1).await.unwrap().is_none());
}
