//! Database initialization for the application's SQLite schema.

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};

use crate::{Error, account, category, loan, transaction, user};

/// Create the tables for all of the application's domain models.
///
/// Also enables foreign key enforcement on `connection` so that deleting an
/// account cascades to its transactions.
///
/// # Errors
/// Returns an error if a table cannot be created or if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    // Foreign keys are off by default in SQLite and must be set outside a
    // transaction, once per connection.
    connection.pragma_update(None, "foreign_keys", true)?;

    let sql_transaction =
        SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    user::create_user_table(&sql_transaction)?;
    account::create_account_table(&sql_transaction)?;
    transaction::create_transaction_table(&sql_transaction)?;
    category::create_category_table(&sql_transaction)?;
    loan::create_loan_table(&sql_transaction)?;

    sql_transaction.commit()?;

    Ok(())
}
