//! Startup configuration for a [`Greenhouse`].

use std::path::{Path, PathBuf};

use log::info;
use tokio::task;

use super::Greenhouse;
use crate::{
    db::Database,
    error::{GreenhouseError, Result},
    models::PLANTS_PER_PAGE,
};

const DATA_DIR_PREFIX: &str = "greenhouse";
const DATABASE_FILE_NAME: &str = "greenhouse.db";

/// Collects the catalogue location and listing page size, then prepares
/// the database once so that every later operation can assume the schema.
#[derive(Debug, Clone)]
pub struct GreenhouseBuilder {
    database_path: Option<PathBuf>,
    page_size: usize,
}

impl GreenhouseBuilder {
    /// Starts from the XDG data location and [`PLANTS_PER_PAGE`].
    pub fn new() -> Self {
        Self {
            database_path: None,
            page_size: PLANTS_PER_PAGE,
        }
    }

    /// Stores the catalogue in `path`. `None` keeps the default,
    /// `greenhouse/greenhouse.db` under the XDG data home.
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Creates missing parent directories and the schema, then hands back
    /// the greenhouse.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` for a page size of zero
    /// - `XdgDirectory` when no default location can be resolved
    /// - `FileSystem` when the parent directory cannot be created
    /// - `Database` when the file cannot be opened or migrated
    pub async fn build(self) -> Result<Greenhouse> {
        if self.page_size == 0 {
            return Err(
                GreenhouseError::invalid_input("page_size").with_reason("must be at least 1")
            );
        }

        let db_path = match self.database_path {
            Some(path) => path,
            None => xdg_database_path()?,
        };
        ensure_parent_dir(&db_path)?;

        let init_path = db_path.clone();
        task::spawn_blocking(move || Database::new(&init_path).map(drop))
            .await
            .map_err(|e| GreenhouseError::Configuration {
                message: format!("Task join error: {e}"),
            })??;

        info!("Using plant database at {}", db_path.display());
        Ok(Greenhouse::new(db_path, self.page_size))
    }
}

impl Default for GreenhouseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn xdg_database_path() -> Result<PathBuf> {
    xdg::BaseDirectories::with_prefix(DATA_DIR_PREFIX)
        .place_data_file(DATABASE_FILE_NAME)
        .map_err(|e| GreenhouseError::XdgDirectory(e.to_string()))
}

// A bare file name has an empty parent; nothing to create then.
fn ensure_parent_dir(db_path: &Path) -> Result<()> {
    match db_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|e| GreenhouseError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })
        }
        _ => Ok(()),
    }
}
