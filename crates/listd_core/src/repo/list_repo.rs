//! List repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `lists` table.
//! - Translate unique-constraint violations into semantic errors.
//! - Keep SQL details inside core persistence boundary.
//!
//! # Invariants
//! - Write paths validate the name before SQL mutations.
//! - Read paths reject invalid persisted state instead of masking it.
//! - List reads are ordered by `id ASC`.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::list::{validate_list_name, List, ListId, ListValidationError};
use rusqlite::{ffi, params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const LIST_SELECT_SQL: &str = "SELECT id, name FROM lists";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for list persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// Input failed model validation before reaching SQL.
    Validation(ListValidationError),
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// Target list does not exist.
    NotFound(ListId),
    /// Another list already uses this name.
    DuplicateName(String),
    /// Persisted data cannot be converted to a valid model.
    InvalidData(String),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
    /// Required column is missing from expected table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "list not found: {id}"),
            Self::DuplicateName(_) => write!(f, "list name is already in use"),
            Self::InvalidData(message) => write!(f, "invalid persisted list data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "list repository requires schema version {expected_version}, got {actual_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "list repository requires table `{table}`")
            }
            Self::MissingRequiredColumn { table, column } => write!(
                f,
                "list repository requires column `{column}` in table `{table}`"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ListValidationError> for RepoError {
    fn from(value: ListValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for list CRUD operations.
pub trait ListRepository {
    /// Returns every list ordered by id.
    fn list_lists(&self) -> RepoResult<Vec<List>>;
    /// Gets one list by id.
    fn get_list(&self, id: ListId) -> RepoResult<Option<List>>;
    /// Inserts a list and returns it with its assigned id.
    fn create_list(&self, name: &str) -> RepoResult<List>;
    /// Renames an existing list and returns the stored record.
    fn update_list(&self, id: ListId, name: &str) -> RepoResult<List>;
    /// Hard-deletes one list.
    fn delete_list(&self, id: ListId) -> RepoResult<()>;
}

/// SQLite-backed list repository.
pub struct SqliteListRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteListRepository<'conn> {
    /// Creates repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_list_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl ListRepository for SqliteListRepository<'_> {
    fn list_lists(&self) -> RepoResult<Vec<List>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{LIST_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut lists = Vec::new();

        while let Some(row) = rows.next()? {
            lists.push(parse_list_row(row)?);
        }

        Ok(lists)
    }

    fn get_list(&self, id: ListId) -> RepoResult<Option<List>> {
        let row = self
            .conn
            .query_row(
                &format!("{LIST_SELECT_SQL} WHERE id = ?1;"),
                [id],
                |row| Ok((row.get::<_, i64>("id")?, row.get::<_, String>("name")?)),
            )
            .optional()?;

        match row {
            Some((id, name)) => {
                let list = List::new(id, name);
                list.validate()
                    .map_err(|err| RepoError::InvalidData(err.to_string()))?;
                Ok(Some(list))
            }
            None => Ok(None),
        }
    }

    fn create_list(&self, name: &str) -> RepoResult<List> {
        validate_list_name(name)?;

        self.conn
            .execute("INSERT INTO lists (name) VALUES (?1);", params![name])
            .map_err(|err| map_write_error(err, name))?;

        Ok(List::new(self.conn.last_insert_rowid(), name))
    }

    fn update_list(&self, id: ListId, name: &str) -> RepoResult<List> {
        validate_list_name(name)?;

        let changed = self
            .conn
            .execute(
                "UPDATE lists SET name = ?2 WHERE id = ?1;",
                params![id, name],
            )
            .map_err(|err| map_write_error(err, name))?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(List::new(id, name))
    }

    fn delete_list(&self, id: ListId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM lists WHERE id = ?1;", [id])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_list_row(row: &Row<'_>) -> RepoResult<List> {
    let list = List::new(row.get("id")?, row.get::<_, String>("name")?);
    list.validate()
        .map_err(|err| RepoError::InvalidData(err.to_string()))?;
    Ok(list)
}

fn map_write_error(err: rusqlite::Error, name: &str) -> RepoError {
    match &err {
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            RepoError::DuplicateName(name.to_string())
        }
        _ => err.into(),
    }
}

fn ensure_list_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "lists")? {
        return Err(RepoError::MissingRequiredTable("lists"));
    }

    for column in ["id", "name"] {
        if !table_has_column(conn, "lists", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "lists",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
