//! Defines the endpoint for deleting a loan.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State},
};
use rusqlite::{Connection, named_params};
use serde::Serialize;

use crate::{
    AppState, Error,
    database_id::{LoanId, OwnerId},
};

/// The state needed to delete a loan.
#[derive(Debug, Clone)]
pub struct DeleteLoanState {
    /// The database connection for managing loans.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The ID of the user that owns the loans.
    pub owner_id: OwnerId,
}

impl FromRef<AppState> for DeleteLoanState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            owner_id: state.owner_id,
        }
    }
}

/// The response body confirming a loan deletion.
#[derive(Debug, Serialize)]
pub struct DeleteLoanResponse {
    /// The ID of the loan that was deleted.
    pub id: LoanId,
}

/// A route handler for deleting a loan.
pub async fn delete_loan_endpoint(
    State(state): State<DeleteLoanState>,
    Path(loan_id): Path<LoanId>,
) -> Result<Json<DeleteLoanResponse>, Error> {
    let connection = state.db_connection.lock().map_err(|_| Error::DatabaseLock)?;

    let id = delete_loan(loan_id, state.owner_id, &connection)?;

    Ok(Json(DeleteLoanResponse { id }))
}

fn delete_loan(id: LoanId, owner_id: OwnerId, connection: &Connection) -> Result<LoanId, Error> {
    let id = connection.query_one(
        "DELETE FROM loan WHERE id = :id AND user_id = :owner_id RETURNING id",
        named_params! {":id": id, ":owner_id": owner_id},
        |row| row.get(0),
    )?;

    Ok(id)
}
