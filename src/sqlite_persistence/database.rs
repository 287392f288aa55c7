//! Owning handle around the SQLite connection.
//!
//! The handle is constructed once at startup and injected into the stores that
//! need it; there is no process-wide connection.

use super::{VersionedSchema, BASE_DB_VERSION};
use anyhow::{bail, Context, Result};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tracing::info;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);
const MEMORY_LOCATION: &str = ":memory:";

/// Where the database lives, parsed from a connection string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    File(PathBuf),
    Memory,
}

impl DatabaseLocation {
    /// Accepts a plain path, a `sqlite://` URL, or `:memory:`.
    pub fn parse(connection_string: &str) -> Result<Self> {
        let trimmed = connection_string.trim();
        let path = trimmed
            .strip_prefix("sqlite://")
            .or_else(|| trimmed.strip_prefix("sqlite:"))
            .unwrap_or(trimmed);
        if path.is_empty() {
            bail!("Empty database connection string");
        }
        if path == MEMORY_LOCATION {
            return Ok(Self::Memory);
        }
        Ok(Self::File(PathBuf::from(path)))
    }
}

#[derive(Clone)]
pub struct SqliteDatabase {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteDatabase {
    /// Opens the database and makes sure it holds the latest of `schemas`.
    ///
    /// A new database gets the latest schema created. An existing one must
    /// already be at the latest version and match it exactly.
    pub fn open(location: &DatabaseLocation, schemas: &[VersionedSchema]) -> Result<Self> {
        let latest = schemas.last().context("No schema provided")?;
        let conn = match location {
            DatabaseLocation::Memory => {
                let conn = Connection::open_in_memory()?;
                latest.create(&conn)?;
                conn
            }
            DatabaseLocation::File(path) => Self::open_file(path, latest)?,
        };
        conn.busy_timeout(BUSY_TIMEOUT)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn open_file(path: &Path, latest: &VersionedSchema) -> Result<Connection> {
        let is_new_db = !path.exists();
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database at {:?}", path))?;

        if is_new_db {
            info!("Creating new database at {:?}", path);
            latest.create(&conn)?;
            return Ok(conn);
        }

        let raw_version: i64 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        let db_version = raw_version - BASE_DB_VERSION as i64;
        if db_version != latest.version as i64 {
            bail!(
                "Database at {:?} has version {}, expected {}",
                path,
                db_version,
                latest.version
            );
        }
        latest
            .validate(&conn)
            .with_context(|| format!("Schema validation failed for {:?}", path))?;
        info!("Opened database at {:?} (version {})", path, db_version);
        Ok(conn)
    }

    /// Locks the connection for the duration of the returned guard.
    pub fn conn(&self) -> MutexGuard<'_, Connection> {
        // A poisoned lock only means another request panicked mid-query; the
        // connection itself is still usable.
        self.conn.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
