//! Tests for database initialization and dataset seeding

use songfinder_common::db::{count_songs, init_database, load_dataset, seed_songs};

#[tokio::test]
async fn test_database_creation_when_missing() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("nested").join("songfinder.db");

    let result = init_database(&db_path).await;

    assert!(result.is_ok(), "Database initialization failed: {:?}", result.err());
    assert!(db_path.exists(), "Database file was not created");
}

#[tokio::test]
async fn test_database_opens_existing_and_keeps_songs() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("songfinder.db");
    let dataset_path = dir.path().join("songs.json");
    std::fs::write(
        &dataset_path,
        r#"[
            {"song_id": 1, "title": "Imagine", "artist": "John Lennon", "year": 1971},
            {"song_id": 3, "title": "You are the sunshine of my life", "artist": "Stevie Wonder"}
        ]"#,
    )
    .unwrap();

    let pool = init_database(&db_path).await.unwrap();
    let songs = load_dataset(&dataset_path).unwrap();
    assert_eq!(seed_songs(&pool, &songs).await.unwrap(), 2);
    pool.close().await;

    // Second open must not recreate or truncate the collection
    let pool = init_database(&db_path).await.unwrap();
    assert_eq!(count_songs(&pool).await.unwrap(), 2);
}

#[test]
fn test_load_dataset_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_dataset(&dir.path().join("nope.json")).is_err());
}
