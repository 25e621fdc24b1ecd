//! Defines the endpoint for fetching a single account by its ID.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State},
};
use rusqlite::Connection;
use serde::Serialize;

use crate::{
    AppState, Error,
    account::{Account, get_account},
    database_id::{AccountId, OwnerId},
};

/// The state needed to fetch an account.
#[derive(Debug, Clone)]
pub struct GetAccountState {
    /// The database connection for managing accounts.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The ID of the user that owns the accounts.
    pub owner_id: OwnerId,
}

impl FromRef<AppState> for GetAccountState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            owner_id: state.owner_id,
        }
    }
}

/// The response body wrapping a single account.
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    /// The requested account.
    pub account: Account,
}

/// A route handler for fetching a single account by its ID.
pub async fn get_account_endpoint(
    State(state): State<GetAccountState>,
    Path(account_id): Path<AccountId>,
) -> Result<Json<AccountResponse>, Error> {
    let connection = state.db_connection.lock().map_err(|_| Error::DatabaseLock)?;

    let account = get_account(account_id, state.owner_id, &connection)?;

    Ok(Json(AccountResponse { account }))
}
