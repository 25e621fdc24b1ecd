//! Defines the endpoint for deleting an account.
//!
//! The account exclusively owns its transactions for lifecycle purposes, so
//! deleting an account cascades deletion of its transactions at the store
//! level.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State},
};
use rusqlite::{Connection, named_params};
use serde::Serialize;

use crate::{
    AppState, Error,
    database_id::{AccountId, OwnerId},
};

/// The state needed to delete an account.
#[derive(Debug, Clone)]
pub struct DeleteAccountState {
    /// The database connection for managing accounts.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The ID of the user that owns the accounts.
    pub owner_id: OwnerId,
}

impl FromRef<AppState> for DeleteAccountState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            owner_id: state.owner_id,
        }
    }
}

/// The response body confirming an account deletion.
#[derive(Debug, Serialize)]
pub struct DeleteAccountResponse {
    /// The ID of the account that was deleted.
    pub id: AccountId,
}

/// A route handler for deleting an account and its transactions.
pub async fn delete_account_endpoint(
    State(state): State<DeleteAccountState>,
    Path(account_id): Path<AccountId>,
) -> Result<Json<DeleteAccountResponse>, Error> {
    let connection = state.db_connection.lock().map_err(|_| Error::DatabaseLock)?;

    let id = delete_account(account_id, state.owner_id, &connection)?;

    Ok(Json(DeleteAccountResponse { id }))
}

fn delete_account(
    id: AccountId,
    owner_id: OwnerId,
    connection: &Connection,
) -> Result<AccountId, Error> {
    let id = connection.query_one(
        "DELETE FROM account WHERE id = :id AND user_id = :owner_id RETURNING id",
        named_params! {":id": id, ":owner_id": owner_id},
        |row| row.get(0),
    )?;

    Ok(id)
}
