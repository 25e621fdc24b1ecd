//! Defines the endpoint for listing all of the owner's accounts.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};
use rusqlite::{Connection, named_params};
use serde::Serialize;

use crate::{
    AppState, Error,
    account::{ACCOUNT_COLUMNS, Account, map_account_row},
    database_id::OwnerId,
};

/// The state needed to list accounts.
#[derive(Debug, Clone)]
pub struct ListAccountsState {
    /// The database connection for managing accounts.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The ID of the user that owns the accounts.
    pub owner_id: OwnerId,
}

impl FromRef<AppState> for ListAccountsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            owner_id: state.owner_id,
        }
    }
}

/// The response body listing all of the owner's accounts.
#[derive(Debug, Serialize)]
pub struct AccountsResponse {
    /// The owner's accounts, oldest first.
    pub accounts: Vec<Account>,
}

/// A route handler for listing all of the owner's accounts.
pub async fn list_accounts_endpoint(
    State(state): State<ListAccountsState>,
) -> Result<Json<AccountsResponse>, Error> {
    let connection = state.db_connection.lock().map_err(|_| Error::DatabaseLock)?;

    let accounts = list_accounts(state.owner_id, &connection)?;

    Ok(Json(AccountsResponse { accounts }))
}

fn list_accounts(owner_id: OwnerId, connection: &Connection) -> Result<Vec<Account>, Error> {
    connection
        .prepare(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM account WHERE user_id = :owner_id ORDER BY created_at ASC, id ASC"
        ))?
        .query_map(named_params! {":owner_id": owner_id}, map_account_row)?
        .map(|maybe_account| maybe_account.map_err(Error::from))
        .collect()
}
