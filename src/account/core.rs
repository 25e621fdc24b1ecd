//! Defines the core data model and shared database queries for accounts.

use rusqlite::{Connection, Row, named_params};
use serde::Serialize;
use time::OffsetDateTime;

use crate::{
    Error,
    database_id::{AccountId, OwnerId},
    money::Money,
};

/// A place money is kept, e.g. a bank account, credit card or cash wallet.
///
/// The stored `balance` is a cache: it always equals the signed sum of the
/// account's transactions. Only [crate::ledger] may change it as a
/// consequence of a transaction mutation; the account edit endpoint may set
/// it directly as an administrative correction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Account {
    /// The ID of the account.
    pub id: AccountId,
    /// The name of the account, unique per owner.
    pub name: String,
    /// A free-form tag describing the account, e.g. "checking" or "cash".
    #[serde(rename = "type")]
    pub kind: String,
    /// The amount of money currently in the account.
    pub balance: Money,
    /// The currency code for the account, e.g. "INR".
    pub currency: String,
    /// When the account was created.
    pub created_at: OffsetDateTime,
    /// When the account was last updated.
    pub updated_at: OffsetDateTime,
}

/// Create the account table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_account_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS account (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL,
                name TEXT NOT NULL,
                kind TEXT NOT NULL,
                balance INTEGER NOT NULL DEFAULT 0,
                currency TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                UNIQUE (user_id, name),
                FOREIGN KEY(user_id) REFERENCES user(id) ON DELETE CASCADE
                )",
        (),
    )?;

    Ok(())
}

/// The columns selected by every account query, in [map_account_row] order.
pub const ACCOUNT_COLUMNS: &str = "id, name, kind, balance, currency, created_at, updated_at";

/// Map a database row to an [Account].
pub fn map_account_row(row: &Row) -> Result<Account, rusqlite::Error> {
    Ok(Account {
        id: row.get(0)?,
        name: row.get(1)?,
        kind: row.get(2)?,
        balance: row.get(3)?,
        currency: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

/// Retrieve the account `id` owned by `owner_id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to an account owned by `owner_id`,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn get_account(
    id: AccountId,
    owner_id: OwnerId,
    connection: &Connection,
) -> Result<Account, Error> {
    let account = connection.query_one(
        &format!("SELECT {ACCOUNT_COLUMNS} FROM account WHERE id = :id AND user_id = :owner_id"),
        named_params! {":id": id, ":owner_id": owner_id},
        map_account_row,
    )?;

    Ok(account)
}

/// Apply a signed `delta` to the balance of account `id` and return the new
/// balance.
///
/// The update is expressed as a relative change applied by the store, never
/// as a read-modify-write by the caller, so concurrent deltas against the
/// same account cannot lose updates.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to an account owned by `owner_id`,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn apply_balance_delta(
    id: AccountId,
    owner_id: OwnerId,
    delta: Money,
    connection: &Connection,
) -> Result<Money, Error> {
    let balance = connection.query_one(
        "UPDATE account SET balance = balance + :delta, updated_at = :now
         WHERE id = :id AND user_id = :owner_id
         RETURNING balance",
        named_params! {
            ":delta": delta,
            ":now": OffsetDateTime::now_utc(),
            ":id": id,
            ":owner_id": owner_id,
        },
        |row| row.get(0),
    )?;

    Ok(balance)
}
