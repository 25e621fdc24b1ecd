//! Defines the core data model and shared database queries for transactions.

use rusqlite::{
    Connection, Row, named_params,
    types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef},
};
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::{
    Error,
    database_id::{AccountId, OwnerId, TransactionId},
    money::Money,
};

/// Whether a transaction increases or decreases its account's balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Money flowing into the account.
    Income,
    /// Money flowing out of the account.
    Expense,
}

impl Direction {
    /// The signed amount this transaction applies to its account's balance:
    /// `+amount` for income, `-amount` for expense.
    ///
    /// Reversing a transaction's effect is always `-delta(...)`.
    pub fn delta(self, amount: Money) -> Money {
        match self {
            Direction::Income => amount,
            Direction::Expense => -amount,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Direction::Income => "income",
            Direction::Expense => "expense",
        }
    }
}

impl ToSql for Direction {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Direction {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value.as_str()? {
            "income" => Ok(Direction::Income),
            "expense" => Ok(Direction::Expense),
            other => Err(FromSqlError::Other(
                format!("invalid transaction direction \"{other}\"").into(),
            )),
        }
    }
}

/// An event where money was either earned or spent against an account.
///
/// Transactions are only ever created, updated and deleted through
/// [crate::ledger], which keeps the owning account's balance in sync.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// The ID of the account the transaction affects.
    pub account_id: AccountId,
    /// The magnitude of the transaction, always strictly positive.
    pub amount: Money,
    /// Whether the amount was earned (income) or spent (expense).
    pub direction: Direction,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The category the transaction belongs to, e.g. "Groceries".
    pub category: String,
    /// The calendar date when the transaction happened.
    pub date: Date,
    /// When the transaction was recorded.
    pub created_at: OffsetDateTime,
    /// When the transaction was last updated.
    pub updated_at: OffsetDateTime,
}

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL,
                account_id INTEGER NOT NULL,
                amount INTEGER NOT NULL,
                direction TEXT NOT NULL,
                description TEXT NOT NULL,
                category TEXT NOT NULL,
                date TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                FOREIGN KEY(user_id) REFERENCES user(id) ON DELETE CASCADE,
                FOREIGN KEY(account_id) REFERENCES account(id) ON DELETE CASCADE
                )",
        (),
    )?;

    // Index used by the wholesale listing, newest first.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transaction_date ON \"transaction\"(date, created_at);",
        (),
    )?;

    Ok(())
}

/// The columns selected by every transaction query, in [map_transaction_row] order.
pub const TRANSACTION_COLUMNS: &str =
    "id, account_id, amount, direction, description, category, date, created_at, updated_at";

/// Map a database row to a [Transaction].
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    Ok(Transaction {
        id: row.get(0)?,
        account_id: row.get(1)?,
        amount: row.get(2)?,
        direction: row.get(3)?,
        description: row.get(4)?,
        category: row.get(5)?,
        date: row.get(6)?,
        created_at: row.get(7)?,
        updated_at: row.get(8)?,
    })
}

/// Retrieve the transaction `id` owned by `owner_id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a transaction owned by `owner_id`,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn get_transaction(
    id: TransactionId,
    owner_id: OwnerId,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection.query_one(
        &format!(
            "SELECT {TRANSACTION_COLUMNS} FROM \"transaction\"
             WHERE id = :id AND user_id = :owner_id"
        ),
        named_params! {":id": id, ":owner_id": owner_id},
        map_transaction_row,
    )?;

    Ok(transaction)
}
