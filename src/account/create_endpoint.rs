//! Defines the endpoint for creating a new account.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    http::StatusCode,
};
use rusqlite::{Connection, named_params};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    AppState, Error,
    account::{ACCOUNT_COLUMNS, Account, map_account_row},
    database_id::OwnerId,
    money::Money,
};

/// The state needed to create an account.
#[derive(Debug, Clone)]
pub struct CreateAccountState {
    /// The database connection for managing accounts.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The ID of the user that owns the accounts.
    pub owner_id: OwnerId,
}

impl FromRef<AppState> for CreateAccountState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            owner_id: state.owner_id,
        }
    }
}

/// The request body for creating an account.
#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    /// The account name, unique per owner.
    pub name: String,
    /// A free-form tag describing the account, e.g. "checking" or "cash".
    #[serde(rename = "type")]
    pub kind: String,
    /// The seed balance, defaults to zero.
    #[serde(default)]
    pub balance: Option<Money>,
    /// The currency code for the account.
    pub currency: String,
}

/// The response body wrapping the created account.
#[derive(Debug, Serialize)]
pub struct CreateAccountResponse {
    /// The account that was created.
    pub account: Account,
}

/// A route handler for creating a new account.
pub async fn create_account_endpoint(
    State(state): State<CreateAccountState>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<(StatusCode, Json<CreateAccountResponse>), Error> {
    let connection = state.db_connection.lock().map_err(|_| Error::DatabaseLock)?;

    let account = create_account(request, state.owner_id, &connection)?;

    Ok((StatusCode::CREATED, Json(CreateAccountResponse { account })))
}

fn create_account(
    request: CreateAccountRequest,
    owner_id: OwnerId,
    connection: &Connection,
) -> Result<Account, Error> {
    if request.name.trim().is_empty() {
        return Err(Error::InvalidInput("account name must not be empty".to_owned()));
    }

    if request.kind.trim().is_empty() {
        return Err(Error::InvalidInput("account type must not be empty".to_owned()));
    }

    if request.currency.trim().is_empty() {
        return Err(Error::InvalidInput("currency must not be empty".to_owned()));
    }

    let now = OffsetDateTime::now_utc();

    let account = connection
        .query_one(
            &format!(
                "INSERT INTO account (user_id, name, kind, balance, currency, created_at, updated_at)
                 VALUES (:owner_id, :name, :kind, :balance, :currency, :now, :now)
                 RETURNING {ACCOUNT_COLUMNS}"
            ),
            named_params! {
                ":owner_id": owner_id,
                ":name": request.name,
                ":kind": request.kind,
                ":balance": request.balance.unwrap_or(Money::ZERO),
                ":currency": request.currency,
                ":now": now,
            },
            map_account_row,
        )
        .map_err(|error| match error {
            // Code 2067 occurs when a UNIQUE constraint failed.
            rusqlite::Error::SqliteFailure(error, Some(_)) if error.extended_code == 2067 => {
                Error::DuplicateAccountName(request.name.clone())
            }
            error => error.into(),
        })?;

    Ok(account)
}
