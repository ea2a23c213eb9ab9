use greenhouse_core::{Greenhouse, GreenhouseBuilder};
use tempfile::TempDir;

/// Helper function to create a test greenhouse
pub async fn create_test_greenhouse() -> (TempDir, Greenhouse) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let greenhouse = GreenhouseBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create greenhouse");
    (temp_dir, greenhouse)
}
