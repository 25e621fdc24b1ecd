//! Defines the endpoint for listing all of the owner's loans.

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
    loan::{LOAN_COLUMNS, Loan, map_loan_row},
};

/// The state needed to list loans.
#[derive(Debug, Clone)]
pub struct ListLoansState {
    /// The database connection for managing loans.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The ID of the user that owns the loans.
    pub owner_id: OwnerId,
}

impl FromRef<AppState> for ListLoansState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            owner_id: state.owner_id,
        }
    }
}

/// The response body listing all of the owner's loans.
#[derive(Debug, Serialize)]
pub struct LoansResponse {
    /// The owner's loans, newest first.
    pub loans: Vec<Loan>,
}

/// A route handler for listing all of the owner's loans.
pub async fn list_loans_endpoint(
    State(state): State<ListLoansState>,
) -> Result<Json<LoansResponse>, Error> {
    let connection = state.db_connection.lock().map_err(|_| Error::DatabaseLock)?;

    let loans = list_loans(state.owner_id, &connection)?;

    Ok(Json(LoansResponse { loans }))
}

fn list_loans(owner_id: OwnerId, connection: &Connection) -> Result<Vec<Loan>, Error> {
    connection
        .prepare(&format!(
            "SELECT {LOAN_COLUMNS} FROM loan
             WHERE user_id = :owner_id
             ORDER BY date DESC, created_at DESC, id DESC"
        ))?
        .query_map(named_params! {":owner_id": owner_id}, map_loan_row)?
        .map(|maybe_loan| maybe_loan.map_err(Error::from))
        .collect()
}
