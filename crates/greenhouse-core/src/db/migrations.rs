//! Database schema initialization and migrations.

use log::info;

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // Catalogues created before plants carried an image reference
        let has_image_link_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('plants') WHERE name = 'image_link'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .db_context("Failed to inspect plants table")?;

        if !has_image_link_column {
            info!("Adding image_link column to plants table");
            self.connection
                .execute("ALTER TABLE plants ADD COLUMN image_link TEXT", [])
                .db_context("Failed to add image_link column to plants table")?;
        }

        Ok(())
    }
}
