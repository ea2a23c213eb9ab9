//! Tests for the greenhouse module.

use super::*;
use crate::{
    models::UpdatePlantRequest,
    params::{CreatePlant, PageRequest},
};
use tempfile::TempDir;

/// Helper function to create a test greenhouse
async fn create_test_greenhouse(page_size: usize) -> (TempDir, Greenhouse) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let greenhouse = GreenhouseBuilder::new()
        .with_database_path(Some(&db_path))
        .with_page_size(page_size)
        .build()
        .await
        .expect("Failed to create greenhouse");
    (temp_dir, greenhouse)
}

#[tokio::test]
async fn test_builder_rejects_zero_page_size() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let result = GreenhouseBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .with_page_size(0)
        .build()
        .await;

    assert!(matches!(result, Err(GreenhouseError::InvalidInput { .. })));
}

#[tokio::test]
async fn test_builder_creates_parent_directories() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("nested").join("dir").join("plants.db");

    let greenhouse = GreenhouseBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create greenhouse");

    assert!(db_path.exists());
    assert_eq!(greenhouse.database_path(), db_path.as_path());
    assert_eq!(greenhouse.page_size(), crate::models::PLANTS_PER_PAGE);
}

#[tokio::test]
async fn test_create_returns_listing_page() {
    let (_temp_dir, greenhouse) = create_test_greenhouse(2).await;

    for name in ["Aloe", "Basil", "Cactus"] {
        greenhouse
            .create_plant(CreatePlant::named(name), PageRequest::default())
            .await
            .expect("Failed to create plant");
    }

    let created = greenhouse
        .create_plant(CreatePlant::named("Dahlia"), PageRequest::new(2))
        .await
        .expect("Failed to create plant");

    assert_eq!(created.page.current_page, 2);
    assert_eq!(created.page.total, 4);
    let names: Vec<_> = created.page.plants.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Cactus", "Dahlia"]);
}

#[tokio::test]
async fn test_create_rejects_blank_name_without_inserting() {
    let (_temp_dir, greenhouse) = create_test_greenhouse(10).await;

    let err = greenhouse
        .create_plant(CreatePlant::named("  "), PageRequest::default())
        .await
        .unwrap_err();
    assert!(err.is_invalid_input());

    let page = greenhouse
        .list_plants(PageRequest::default())
        .await
        .expect("Failed to list plants");
    assert_eq!(page.total, 0);
}

#[tokio::test]
async fn test_update_missing_plant_is_not_found() {
    let (_temp_dir, greenhouse) = create_test_greenhouse(10).await;

    let err = greenhouse
        .update_plant(
            404,
            UpdatePlantRequest {
                name: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_delete_returns_remaining_plants() {
    let (_temp_dir, greenhouse) = create_test_greenhouse(10).await;

    let first = greenhouse
        .create_plant(CreatePlant::named("Mint"), PageRequest::default())
        .await
        .expect("Failed to create plant");
    greenhouse
        .create_plant(CreatePlant::named("Sage"), PageRequest::default())
        .await
        .expect("Failed to create plant");

    let deleted = greenhouse
        .delete_plant(first.id, PageRequest::default())
        .await
        .expect("Failed to delete plant");

    assert_eq!(deleted.id, first.id);
    assert_eq!(deleted.page.total, 1);
    assert_eq!(deleted.page.plants[0].name, "Sage");
}

#[tokio::test]
async fn test_delete_missing_plant_is_not_found() {
    let (_temp_dir, greenhouse) = create_test_greenhouse(10).await;

    let err = greenhouse
        .delete_plant(99, PageRequest::default())
        .await
        .unwrap_err();

    assert!(matches!(err, GreenhouseError::PlantNotFound { id: 99 }));
}

#[tokio::test]
async fn test_search_total_counts_all_matches() {
    let (_temp_dir, greenhouse) = create_test_greenhouse(1).await;

    for name in ["Red Rose", "White Rose", "Tulip"] {
        greenhouse
            .create_plant(CreatePlant::named(name), PageRequest::default())
            .await
            .expect("Failed to create plant");
    }

    let page = greenhouse
        .search_plants("Rose", PageRequest::new(2))
        .await
        .expect("Failed to search plants");

    assert_eq!(page.total, 2);
    assert_eq!(page.plants.len(), 1);
    assert_eq!(page.plants[0].name, "White Rose");
}

#[tokio::test]
async fn test_create_rolls_back_when_listing_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    {
        // Without the CHECK constraint a row can hold a flag no plant can.
        let conn = rusqlite::Connection::open(&db_path).expect("Failed to open sqlite");
        conn.execute_batch(
            "CREATE TABLE plants (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                scientific_name TEXT,
                is_poisonous INTEGER NOT NULL DEFAULT 0,
                primary_color TEXT,
                image_link TEXT
            );
            INSERT INTO plants (name, is_poisonous) VALUES ('Mystery', 'maybe');",
        )
        .expect("Failed to seed unreadable row");
    }
    let greenhouse = GreenhouseBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create greenhouse");

    let err = greenhouse
        .create_plant(CreatePlant::named("Fern"), PageRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, GreenhouseError::Database { .. }));

    let conn = rusqlite::Connection::open(&db_path).expect("Failed to open sqlite");
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM plants", [], |row| row.get(0))
        .expect("Failed to count plants");
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_reads_proceed_while_a_write_is_open() {
    let (temp_dir, greenhouse) = create_test_greenhouse(10).await;
    let created = greenhouse
        .create_plant(CreatePlant::named("Basil"), PageRequest::default())
        .await
        .expect("Failed to create plant");

    let mut db = Database::open(temp_dir.path().join("test.db")).expect("Failed to open database");
    let writer = db.begin().expect("Failed to begin write session");

    let page = greenhouse
        .list_plants(PageRequest::default())
        .await
        .expect("Failed to list plants");
    assert_eq!(page.total, 1);
    let basil = greenhouse
        .get_plant(created.id)
        .await
        .expect("Failed to get plant");
    assert_eq!(basil.name, "Basil");
    let found = greenhouse
        .search_plants("Bas", PageRequest::default())
        .await
        .expect("Failed to search plants");
    assert_eq!(found.total, 1);

    writer.rollback().expect("Failed to roll back write session");
}
