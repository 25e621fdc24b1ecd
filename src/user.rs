//! Provisioning for the user that owns every other record.
//!
//! The application is single-user: the server provisions one user row at
//! startup and threads its ID through every store call as the owner. Keeping
//! the owner an explicit parameter means multi-user support would be a
//! non-breaking extension.

use rusqlite::{Connection, params};
use time::OffsetDateTime;

use crate::{Error, database_id::OwnerId};

/// Create the user table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_user_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS user (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT NOT NULL UNIQUE,
                created_at TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}

/// Get the ID of the user `username`, creating the row if it does not exist.
///
/// This function is idempotent, calling it twice with the same name returns
/// the same ID.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn ensure_user(username: &str, connection: &Connection) -> Result<OwnerId, Error> {
    connection.execute(
        "INSERT OR IGNORE INTO user (username, created_at) VALUES (?1, ?2)",
        params![username, OffsetDateTime::now_utc()],
    )?;

    let id = connection.query_one(
        "SELECT id FROM user WHERE username = :username",
        &[(":username", &username)],
        |row| row.get(0),
    )?;

    Ok(id)
}
