//! Shared handler state.
//!
//! # Responsibility
//! - Own the single SQLite connection shared by all requests.
//! - Run blocking database work off the async executor.
//!
//! # Invariants
//! - The connection is migrated before the state is built.
//! - At most one request touches the connection at a time.

use crate::error::ApiError;
use listd_core::db::{open_db, open_db_in_memory, DbResult};
use listd_core::{ListService, SqliteListRepository};
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// List service bound to a borrowed connection for one request.
pub type RequestListService<'conn> = ListService<SqliteListRepository<'conn>>;

#[derive(Clone)]
pub struct AppState {
    conn: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Wraps an already migrated connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Opens (and migrates) a database file.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        Ok(Self::new(open_db(path)?))
    }

    /// Opens a fresh, migrated in-memory database.
    pub fn in_memory() -> DbResult<Self> {
        Ok(Self::new(open_db_in_memory()?))
    }

    /// Runs `f` with exclusive access to the connection on the blocking pool.
    pub async fn with_connection<T, F>(&self, f: F) -> Result<T, ApiError>
    where
        F: FnOnce(&Connection) -> Result<T, ApiError> + Send + 'static,
        T: Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let guard = conn
                .lock()
                .map_err(|_| ApiError::Internal("database connection lock poisoned".to_string()))?;
            f(&*guard)
        })
        .await
        .map_err(|err| ApiError::Internal(format!("database task failed: {err}")))?
    }

    /// Runs `f` against a list service bound to the shared connection.
    pub async fn with_list_service<T, F>(&self, f: F) -> Result<T, ApiError>
    where
        F: FnOnce(&RequestListService<'_>) -> Result<T, ApiError> + Send + 'static,
        T: Send + 'static,
    {
        self.with_connection(move |conn| {
            let repo = SqliteListRepository::try_new(conn)?;
            f(&ListService::new(repo))
        })
        .await
    }
}
