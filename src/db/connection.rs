//! Database connection management
//!
//! Pooled SQLite access for the preferences store.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::OpenFlags;
use thiserror::Error;

/// Database error types
#[derive(Debug, Error)]
pub enum DbError {
    #[error("Database connection error: {0}")]
    Connection(#[from] r2d2::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

pub type DbResult<T> = Result<T, DbError>;

const POOL_SIZE: u32 = 4;

const CONNECTION_PRAGMAS: &str = "PRAGMA journal_mode = WAL;
                                  PRAGMA synchronous = NORMAL;";

/// Pooled handle on the preferences database file
#[derive(Clone)]
pub struct Database {
    pool: Arc<Pool<SqliteConnectionManager>>,
    path: PathBuf,
}

impl Database {
    /// Open (creating if needed) the database at `path`
    pub fn new<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let path = path.as_ref().to_path_buf();
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_URI;

        let manager = SqliteConnectionManager::file(&path)
            .with_flags(flags)
            .with_init(|conn| conn.execute_batch(CONNECTION_PRAGMAS));

        let pool = Pool::builder().max_size(POOL_SIZE).build(manager)?;
        tracing::debug!("Opened preferences database at {}", path.display());

        Ok(Self {
            pool: Arc::new(pool),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get_conn(&self) -> DbResult<PooledConnection<SqliteConnectionManager>> {
        Ok(self.pool.get()?)
    }

    /// Run `f` with a pooled connection
    pub fn with_conn<F, T>(&self, f: F) -> DbResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> DbResult<T>,
    {
        let conn = self.get_conn()?;
        f(&conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_creates_file() {
        let path = std::env::temp_dir().join(format!("bestinut-conn-{}.db", std::process::id()));
        std::fs::remove_file(&path).ok();

        let db = Database::new(&path).unwrap();
        assert_eq!(db.path(), path.as_path());

        let one: i64 = db.with_conn(|conn| Ok(conn.query_row("SELECT 1", [], |r| r.get(0))?)).unwrap();
        assert_eq!(one, 1);
        assert!(path.exists());

        drop(db);
        std::fs::remove_file(&path).ok();
    }
}
