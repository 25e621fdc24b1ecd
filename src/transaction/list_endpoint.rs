//! Defines the endpoint for listing all of the owner's transactions.
//!
//! The listing is wholesale and newest first: the transaction date takes
//! precedence, ties are broken by insertion order, newest first.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};
use rusqlite::{Connection, named_params};
use serde::Serialize;

use crate::{
    AppState, Error,
    database_id::OwnerId,
    transaction::{TRANSACTION_COLUMNS, Transaction, map_transaction_row},
};

/// The state needed to list transactions.
#[derive(Debug, Clone)]
pub struct ListTransactionsState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The ID of the user that owns the transactions.
    pub owner_id: OwnerId,
}

impl FromRef<AppState> for ListTransactionsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            owner_id: state.owner_id,
        }
    }
}

/// The response body listing all of the owner's transactions.
#[derive(Debug, Serialize)]
pub struct TransactionsResponse {
    /// The owner's transactions, newest first.
    pub transactions: Vec<Transaction>,
}

/// A route handler for listing all of the owner's transactions.
pub async fn list_transactions_endpoint(
    State(state): State<ListTransactionsState>,
) -> Result<Json<TransactionsResponse>, Error> {
    let connection = state.db_connection.lock().map_err(|_| Error::DatabaseLock)?;

    let transactions = list_transactions(state.owner_id, &connection)?;

    Ok(Json(TransactionsResponse { transactions }))
}

fn list_transactions(
    owner_id: OwnerId,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(&format!(
            "SELECT {TRANSACTION_COLUMNS} FROM \"transaction\"
             WHERE user_id = :owner_id
             ORDER BY date DESC, created_at DESC, id DESC"
        ))?
        .query_map(named_params! {":owner_id": owner_id}, map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
        .collect()
}
