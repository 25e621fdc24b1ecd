//! Defines the core data model for transaction categories.

use rusqlite::{Connection, Row};
use serde::Serialize;
use time::OffsetDateTime;

use crate::{database_id::CategoryId, transaction::Direction};

/// A label for grouping transactions, e.g. "Groceries" under expenses.
///
/// A category name may exist once per direction, so "Gifts" can be both an
/// income and an expense category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    /// The ID of the category.
    pub id: CategoryId,
    /// The display name of the category.
    pub name: String,
    /// Which direction of transactions the category applies to.
    #[serde(rename = "type")]
    pub kind: Direction,
    /// When the category was created.
    pub created_at: OffsetDateTime,
    /// When the category was last updated.
    pub updated_at: OffsetDateTime,
}

/// Create the category table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_category_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS category (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL,
                name TEXT NOT NULL,
                kind TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                UNIQUE(user_id, name, kind),
                FOREIGN KEY(user_id) REFERENCES user(id) ON DELETE CASCADE
                )",
        (),
    )?;

    Ok(())
}

/// The columns selected by every category query, in [map_category_row] order.
pub const CATEGORY_COLUMNS: &str = "id, name, kind, created_at, updated_at";

/// Map a database row to a [Category].
pub fn map_category_row(row: &Row) -> Result<Category, rusqlite::Error> {
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
        kind: row.get(2)?,
        created_at: row.get(3)?,
        updated_at: row.get(4)?,
    })
}
