//! Defines the endpoint for recording a new transaction.
//!
//! Recording goes through [crate::ledger] so the referenced account's
//! balance is updated in the same transactional unit as the insert.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    http::StatusCode,
};
use rusqlite::Connection;
use serde::Serialize;

use crate::{
    AppState, Error,
    database_id::OwnerId,
    ledger::{NewTransaction, record_transaction},
    money::Money,
    transaction::Transaction,
};

/// The state needed to record a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The ID of the user that owns the transactions.
    pub owner_id: OwnerId,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            owner_id: state.owner_id,
        }
    }
}

/// The response body wrapping the recorded transaction and the new balance
/// of its account.
#[derive(Debug, Serialize)]
pub struct CreateTransactionResponse {
    /// The transaction that was recorded.
    pub transaction: Transaction,
    /// The balance of the transaction's account after recording.
    pub account_balance: Money,
}

/// A route handler for recording a new transaction.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Json(request): Json<NewTransaction>,
) -> Result<(StatusCode, Json<CreateTransactionResponse>), Error> {
    let mut connection = state.db_connection.lock().map_err(|_| Error::DatabaseLock)?;

    let posted = record_transaction(request, state.owner_id, &mut connection)?;

    Ok((
        StatusCode::CREATED,
        Json(CreateTransactionResponse {
            transaction: posted.transaction,
            account_balance: posted.account_balance,
        }),
    ))
}
