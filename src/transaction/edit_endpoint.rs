//! Defines the endpoint for revising a transaction.
//!
//! The update is partial: fields that are not supplied keep their current
//! value. Changing `account_id` moves the transaction, adjusting both the
//! old and new account balances in one transactional unit.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State},
};
use rusqlite::Connection;
use serde::Serialize;

use crate::{
    AppState, Error,
    database_id::{OwnerId, TransactionId},
    ledger::{TransactionUpdate, revise_transaction},
    money::Money,
    transaction::Transaction,
};

/// The state needed to revise a transaction.
#[derive(Debug, Clone)]
pub struct EditTransactionState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The ID of the user that owns the transactions.
    pub owner_id: OwnerId,
}

impl FromRef<AppState> for EditTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            owner_id: state.owner_id,
        }
    }
}

/// The response body wrapping the revised transaction and the new balance
/// of its (possibly new) account.
#[derive(Debug, Serialize)]
pub struct EditTransactionResponse {
    /// The transaction after the revision.
    pub transaction: Transaction,
    /// The balance of the transaction's account after the revision.
    pub account_balance: Money,
}

/// A route handler for revising a transaction.
pub async fn edit_transaction_endpoint(
    State(state): State<EditTransactionState>,
    Path(transaction_id): Path<TransactionId>,
    Json(request): Json<TransactionUpdate>,
) -> Result<Json<EditTransactionResponse>, Error> {
    let mut connection = state.db_connection.lock().map_err(|_| Error::DatabaseLock)?;

    let posted = revise_transaction(transaction_id, request, state.owner_id, &mut connection)?;

    Ok(Json(EditTransactionResponse {
        transaction: posted.transaction,
        account_balance: posted.account_balance,
    }))
}
