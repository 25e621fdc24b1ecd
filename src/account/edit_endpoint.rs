//! Defines the endpoint for updating an account.
//!
//! The update is partial: fields that are not supplied keep their current
//! value. Supplying `balance` is an administrative direct edit that bypasses
//! the transaction history, intended for corrections and opening balances.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State},
};
use rusqlite::{Connection, named_params};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    AppState, Error,
    account::{ACCOUNT_COLUMNS, Account, get_account, map_account_row},
    database_id::{AccountId, OwnerId},
    money::Money,
};

/// The state needed to update an account.
#[derive(Debug, Clone)]
pub struct EditAccountState {
    /// The database connection for managing accounts.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The ID of the user that owns the accounts.
    pub owner_id: OwnerId,
}

impl FromRef<AppState> for EditAccountState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            owner_id: state.owner_id,
        }
    }
}

/// The request body for updating an account. Unset fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct EditAccountRequest {
    /// The new account name.
    pub name: Option<String>,
    /// The new account type tag.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// The new balance (administrative direct edit).
    pub balance: Option<Money>,
    /// The new currency code.
    pub currency: Option<String>,
}

/// The response body wrapping the updated account.
#[derive(Debug, Serialize)]
pub struct EditAccountResponse {
    /// The account after the update.
    pub account: Account,
}

/// A route handler for updating an account.
pub async fn edit_account_endpoint(
    State(state): State<EditAccountState>,
    Path(account_id): Path<AccountId>,
    Json(request): Json<EditAccountRequest>,
) -> Result<Json<EditAccountResponse>, Error> {
    let connection = state.db_connection.lock().map_err(|_| Error::DatabaseLock)?;

    let account = edit_account(account_id, request, state.owner_id, &connection)?;

    Ok(Json(EditAccountResponse { account }))
}

fn edit_account(
    id: AccountId,
    request: EditAccountRequest,
    owner_id: OwnerId,
    connection: &Connection,
) -> Result<Account, Error> {
    let current = get_account(id, owner_id, connection)?;

    let name = request.name.unwrap_or(current.name);
    let kind = request.kind.unwrap_or(current.kind);
    let balance = request.balance.unwrap_or(current.balance);
    let currency = request.currency.unwrap_or(current.currency);

    if name.trim().is_empty() {
        return Err(Error::InvalidInput("account name must not be empty".to_owned()));
    }

    if kind.trim().is_empty() {
        return Err(Error::InvalidInput("account type must not be empty".to_owned()));
    }

    if currency.trim().is_empty() {
        return Err(Error::InvalidInput("currency must not be empty".to_owned()));
    }

    let account = connection
        .query_one(
            &format!(
                "UPDATE account
                 SET name = :name, kind = :kind, balance = :balance, currency = :currency,
                     updated_at = :now
                 WHERE id = :id AND user_id = :owner_id
                 RETURNING {ACCOUNT_COLUMNS}"
            ),
            named_params! {
                ":name": name,
                ":kind": kind,
                ":balance": balance,
                ":currency": currency,
                ":now": OffsetDateTime::now_utc(),
                ":id": id,
                ":owner_id": owner_id,
            },
            map_account_row,
        )
        .map_err(|error| match error {
            // Code 2067 occurs when a UNIQUE constraint failed.
            rusqlite::Error::SqliteFailure(error, Some(_)) if error.extended_code == 2067 => {
                Error::DuplicateAccountName(name.clone())
            }
            error => error.into(),
        })?;

    Ok(account)
}
