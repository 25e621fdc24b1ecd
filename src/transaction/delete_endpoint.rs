//! Defines the endpoint for deleting a transaction.
//!
//! Deletion goes through [crate::ledger] so the transaction's effect on its
//! account is reversed in the same transactional unit as the delete.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State},
};
use rusqlite::Connection;
use serde::Serialize;

use crate::{
    AppState, Error,
    database_id::{AccountId, OwnerId, TransactionId},
    ledger::remove_transaction,
    money::Money,
};

/// The state needed to delete a transaction.
#[derive(Debug, Clone)]
pub struct DeleteTransactionState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The ID of the user that owns the transactions.
    pub owner_id: OwnerId,
}

impl FromRef<AppState> for DeleteTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            owner_id: state.owner_id,
        }
    }
}

/// The response body confirming a transaction deletion.
#[derive(Debug, Serialize)]
pub struct DeleteTransactionResponse {
    /// The ID of the transaction that was deleted.
    pub id: TransactionId,
    /// The account the transaction affected.
    pub account_id: AccountId,
    /// The balance of that account after the reversal.
    pub account_balance: Money,
}

/// A route handler for deleting a transaction and reversing its effect.
pub async fn delete_transaction_endpoint(
    State(state): State<DeleteTransactionState>,
    Path(transaction_id): Path<TransactionId>,
) -> Result<Json<DeleteTransactionResponse>, Error> {
    let mut connection = state.db_connection.lock().map_err(|_| Error::DatabaseLock)?;

    let removed = remove_transaction(transaction_id, state.owner_id, &mut connection)?;

    Ok(Json(DeleteTransactionResponse {
        id: removed.id,
        account_id: removed.account_id,
        account_balance: removed.account_balance,
    }))
}
