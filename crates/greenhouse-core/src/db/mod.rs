//! Database operations and SQLite management for plants.
//!
//! A [`Database`] owns one SQLite connection. All reads and writes happen
//! through a [`Session`], a transaction borrowed from that connection which
//! implements [`PlantStore`]. Committing a session makes its changes durable;
//! dropping it uncommitted rolls every change back. The connection itself is
//! closed when the `Database` is dropped, so a caller that scopes both to a
//! single operation releases them on every exit path.

use std::{path::Path, time::Duration};

use log::debug;
use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod plant_queries;
pub mod store;

pub use store::PlantStore;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let db = Self::open(path)?;
        db.initialize_schema()?;
        Ok(db)
    }

    /// Connects to a database whose schema is already in place.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        // Concurrent requests each open their own connection; wait for the
        // write lock instead of failing immediately with SQLITE_BUSY.
        connection
            .busy_timeout(BUSY_TIMEOUT)
            .db_context("Failed to set busy timeout")?;

        Ok(Self { connection })
    }

    /// Opens a private in-memory database, mostly useful for tests.
    pub fn open_in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Begins a new session (transaction) on this connection.
    ///
    /// The write lock is taken up front so that a session never has to
    /// upgrade from a read to a write midway through an operation.
    pub fn begin(&mut self) -> Result<Session<'_>> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin transaction")?;
        Ok(Session { tx })
    }

    /// Begins a session that only reads.
    ///
    /// No lock is taken until the first statement runs, and readers never
    /// block each other or wait on a writer that has not yet committed.
    pub fn begin_read(&mut self) -> Result<Session<'_>> {
        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Deferred)
            .db_context("Failed to begin read transaction")?;
        Ok(Session { tx })
    }
}

/// A single all-or-nothing unit of work against the plants table.
pub struct Session<'conn> {
    tx: Transaction<'conn>,
}

impl Session<'_> {
    /// Commits every change made through this session.
    pub fn commit(self) -> Result<()> {
        self.tx.commit().db_context("Failed to commit transaction")
    }

    /// Explicitly discards every change made through this session.
    ///
    /// Dropping the session has the same effect; this exists for callers
    /// that want the rollback to be visible in the code.
    pub fn rollback(self) -> Result<()> {
        debug!("Rolling back session");
        self.tx.rollback().db_context("Failed to roll back transaction")
    }
}
