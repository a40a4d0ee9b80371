//! Known-state fixtures for the `lists` table.
//!
//! # Responsibility
//! - Empty the store and restart id assignment.
//! - Insert the fixed fixture lists used by integration tests and local runs.
//!
//! # Invariants
//! - After `reseed`, fixture lists own ids `1..=FIXTURE_LIST_NAMES.len()` in order.
//! - Fixture names never collide with names tests create themselves.

use super::DbResult;
use crate::model::list::List;
use log::info;
use rusqlite::{params, Connection};

/// Names inserted by [`seed`], in id order.
pub const FIXTURE_LIST_NAMES: &[&str] = &["Groceries", "Chores"];

/// Deletes every list and resets the id sequence so the next insert gets id 1.
pub fn truncate(conn: &Connection) -> DbResult<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(
        "DELETE FROM lists;
         DELETE FROM sqlite_sequence WHERE name = 'lists';",
    )?;
    tx.commit()?;

    info!("event=db_truncate module=db status=ok table=lists");
    Ok(())
}

/// Inserts the fixture lists and returns them ordered by id.
///
/// Fails with a unique-constraint error when fixtures are already present.
pub fn seed(conn: &Connection) -> DbResult<Vec<List>> {
    let tx = conn.unchecked_transaction()?;
    let mut lists = Vec::with_capacity(FIXTURE_LIST_NAMES.len());
    for name in FIXTURE_LIST_NAMES {
        tx.execute("INSERT INTO lists (name) VALUES (?1);", params![name])?;
        lists.push(List::new(tx.last_insert_rowid(), *name));
    }
    tx.commit()?;

    info!(
        "event=db_seed module=db status=ok table=lists rows={}",
        lists.len()
    );
    Ok(lists)
}

/// Restores the fixture state: [`truncate`] followed by [`seed`].
pub fn reseed(conn: &Connection) -> DbResult<Vec<List>> {
    truncate(conn)?;
    seed(conn)
}
