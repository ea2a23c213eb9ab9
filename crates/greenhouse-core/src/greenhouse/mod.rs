//! High-level greenhouse API for managing plants.
//!
//! [`Greenhouse`] is the entry point the HTTP layer talks to. Every operation
//! follows the same lifecycle:
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ open session │───▶│ store call(s)│───▶│   paginate   │───▶│ commit / drop│
//! │ (connection) │    │ (PlantStore) │    │ (PlantPage)  │    │  (rollback)  │
//! └──────────────┘    └──────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! The connection and transaction live only for the duration of a single
//! operation and run on tokio's blocking pool. An error at any step drops the
//! uncommitted session, which rolls it back, and then closes the connection.
//!
//! # Usage
//!
//! ```rust,no_run
//! use greenhouse_core::{params::{CreatePlant, PageRequest}, GreenhouseBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let greenhouse = GreenhouseBuilder::new()
//!     .with_database_path(Some("plants.db"))
//!     .build()
//!     .await?;
//!
//! let created = greenhouse
//!     .create_plant(CreatePlant::named("Fern"), PageRequest::default())
//!     .await?;
//! let fern = greenhouse.get_plant(created.id).await?;
//! assert_eq!(fern.name, "Fern");
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{
    db::{Database, Session},
    error::{GreenhouseError, Result},
};

pub mod builder;
pub mod plant_ops;

#[cfg(test)]
mod tests;

pub use builder::GreenhouseBuilder;
pub use plant_ops::{CreatedPlant, DeletedPlant};

#[derive(Debug, Clone, Copy)]
enum Access {
    Read,
    Write,
}

/// Main interface for managing the plant catalogue.
#[derive(Debug, Clone)]
pub struct Greenhouse {
    pub(crate) db_path: PathBuf,
    pub(crate) page_size: usize,
}

impl Greenhouse {
    /// Creates a new greenhouse over the given database path.
    pub(crate) fn new(db_path: PathBuf, page_size: usize) -> Self {
        Self { db_path, page_size }
    }

    /// Path of the SQLite database backing this greenhouse.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Number of plants returned per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Runs `op` inside a fresh write session and commits it if `op`
    /// succeeds.
    ///
    /// On failure the session is dropped uncommitted (rolled back). The
    /// connection is closed when the blocking task returns either way.
    pub(crate) async fn with_session<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Session<'_>) -> Result<T> + Send + 'static,
    {
        self.run_session(Access::Write, op).await
    }

    /// Like [`Self::with_session`] but deferred: no write lock is taken.
    pub(crate) async fn with_read_session<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Session<'_>) -> Result<T> + Send + 'static,
    {
        self.run_session(Access::Read, op).await
    }

    async fn run_session<T, F>(&self, access: Access, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Session<'_>) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            // The schema was created by the builder.
            let mut db = Database::open(&db_path)?;
            let session = match access {
                Access::Read => db.begin_read()?,
                Access::Write => db.begin()?,
            };
            let value = op(&session)?;
            session.commit()?;
            Ok(value)
        })
        .await
        .map_err(|e| GreenhouseError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
