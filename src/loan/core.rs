//! Defines the core data model and shared database queries for
//! lending/borrowing records.
//!
//! Loans are informal IOUs tracked alongside the ledger. They never touch
//! account balances, so unlike transactions they are managed with plain
//! single-statement queries.

use rusqlite::{
    Connection, Row, named_params,
    types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef},
};
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::{
    Error,
    database_id::{LoanId, OwnerId},
    money::Money,
};

/// Whether the owner lent money to the other person or borrowed from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanKind {
    /// The owner gave money and is owed it back.
    Lent,
    /// The owner received money and owes it back.
    Borrowed,
}

impl LoanKind {
    fn as_str(self) -> &'static str {
        match self {
            LoanKind::Lent => "lent",
            LoanKind::Borrowed => "borrowed",
        }
    }
}

impl ToSql for LoanKind {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for LoanKind {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value.as_str()? {
            "lent" => Ok(LoanKind::Lent),
            "borrowed" => Ok(LoanKind::Borrowed),
            other => Err(FromSqlError::Other(
                format!("invalid loan kind \"{other}\"").into(),
            )),
        }
    }
}

/// The repayment state of a loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    /// The loan has not been repaid yet.
    Outstanding,
    /// The loan has been repaid in full.
    Paid,
    /// The loan passed its due date without repayment.
    Overdue,
}

impl LoanStatus {
    fn as_str(self) -> &'static str {
        match self {
            LoanStatus::Outstanding => "outstanding",
            LoanStatus::Paid => "paid",
            LoanStatus::Overdue => "overdue",
        }
    }
}

impl ToSql for LoanStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for LoanStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value.as_str()? {
            "outstanding" => Ok(LoanStatus::Outstanding),
            "paid" => Ok(LoanStatus::Paid),
            "overdue" => Ok(LoanStatus::Overdue),
            other => Err(FromSqlError::Other(
                format!("invalid loan status \"{other}\"").into(),
            )),
        }
    }
}

/// A record of money lent to or borrowed from another person.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Loan {
    /// The ID of the loan.
    pub id: LoanId,
    /// Whether the money was lent or borrowed.
    #[serde(rename = "type")]
    pub kind: LoanKind,
    /// The name of the other person.
    pub person: String,
    /// The amount lent or borrowed, always strictly positive.
    pub amount: Money,
    /// The date the loan was made.
    pub date: Date,
    /// The date the loan is due to be repaid, if agreed.
    pub due_date: Option<Date>,
    /// The repayment state of the loan.
    pub status: LoanStatus,
    /// Free-form notes about the loan.
    pub notes: Option<String>,
    /// When the loan was recorded.
    pub created_at: OffsetDateTime,
    /// When the loan was last updated.
    pub updated_at: OffsetDateTime,
}

/// Create the loan table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_loan_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS loan (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL,
                kind TEXT NOT NULL,
                person TEXT NOT NULL,
                amount INTEGER NOT NULL,
                date TEXT NOT NULL,
                due_date TEXT,
                status TEXT NOT NULL DEFAULT 'outstanding',
                notes TEXT,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                FOREIGN KEY(user_id) REFERENCES user(id) ON DELETE CASCADE
                )",
        (),
    )?;

    Ok(())
}

/// The columns selected by every loan query, in [map_loan_row] order.
pub const LOAN_COLUMNS: &str =
    "id, kind, person, amount, date, due_date, status, notes, created_at, updated_at";

/// Map a database row to a [Loan].
pub fn map_loan_row(row: &Row) -> Result<Loan, rusqlite::Error> {
    Ok(Loan {
        id: row.get(0)?,
        kind: row.get(1)?,
        person: row.get(2)?,
        amount: row.get(3)?,
        date: row.get(4)?,
        due_date: row.get(5)?,
        status: row.get(6)?,
        notes: row.get(7)?,
        created_at: row.get(8)?,
        updated_at: row.get(9)?,
    })
}

/// Retrieve the loan `id` owned by `owner_id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a loan owned by `owner_id`,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn get_loan(id: LoanId, owner_id: OwnerId, connection: &Connection) -> Result<Loan, Error> {
    let loan = connection.query_one(
        &format!("SELECT {LOAN_COLUMNS} FROM loan WHERE id = :id AND user_id = :owner_id"),
        named_params! {":id": id, ":owner_id": owner_id},
        map_loan_row,
    )?;

    Ok(loan)
}
