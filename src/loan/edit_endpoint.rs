//! Defines the endpoint for updating a loan.
//!
//! The update is partial: fields that are not supplied keep their current
//! value. Supplying `due_date` or `notes` replaces the stored value; there
//! is no way to clear them back to null through this endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State},
};
use rusqlite::{Connection, named_params};
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::{
    AppState, Error,
    database_id::{LoanId, OwnerId},
    loan::{LOAN_COLUMNS, Loan, LoanKind, LoanStatus, get_loan, map_loan_row},
    money::Money,
};

/// The state needed to update a loan.
#[derive(Debug, Clone)]
pub struct EditLoanState {
    /// The database connection for managing loans.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The ID of the user that owns the loans.
    pub owner_id: OwnerId,
}

impl FromRef<AppState> for EditLoanState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            owner_id: state.owner_id,
        }
    }
}

/// The request body for updating a loan. Unset fields are left unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct EditLoanRequest {
    /// Whether the money was lent or borrowed.
    #[serde(rename = "type")]
    pub kind: Option<LoanKind>,
    /// The name of the other person.
    pub person: Option<String>,
    /// The amount lent or borrowed, must be strictly positive.
    pub amount: Option<Money>,
    /// The date the loan was made.
    pub date: Option<Date>,
    /// The date the loan is due to be repaid.
    pub due_date: Option<Date>,
    /// The repayment state of the loan.
    pub status: Option<LoanStatus>,
    /// Free-form notes about the loan.
    pub notes: Option<String>,
}

/// The response body wrapping the updated loan.
#[derive(Debug, Serialize)]
pub struct EditLoanResponse {
    /// The loan after the update.
    pub loan: Loan,
}

/// A route handler for updating a loan.
pub async fn edit_loan_endpoint(
    State(state): State<EditLoanState>,
    Path(loan_id): Path<LoanId>,
    Json(request): Json<EditLoanRequest>,
) -> Result<Json<EditLoanResponse>, Error> {
    let connection = state.db_connection.lock().map_err(|_| Error::DatabaseLock)?;

    let loan = edit_loan(loan_id, request, state.owner_id, &connection)?;

    Ok(Json(EditLoanResponse { loan }))
}

fn edit_loan(
    id: LoanId,
    request: EditLoanRequest,
    owner_id: OwnerId,
    connection: &Connection,
) -> Result<Loan, Error> {
    let current = get_loan(id, owner_id, connection)?;

    let kind = request.kind.unwrap_or(current.kind);
    let person = request.person.unwrap_or(current.person);
    let amount = request.amount.unwrap_or(current.amount);
    let date = request.date.unwrap_or(current.date);
    let due_date = request.due_date.or(current.due_date);
    let status = request.status.unwrap_or(current.status);
    let notes = request.notes.or(current.notes);

    if person.trim().is_empty() {
        return Err(Error::InvalidInput("person must not be empty".to_owned()));
    }

    if !amount.is_positive() {
        return Err(Error::InvalidInput(
            "amount must be a positive number".to_owned(),
        ));
    }

    let loan = connection.query_one(
        &format!(
            "UPDATE loan
             SET kind = :kind, person = :person, amount = :amount, date = :date,
                 due_date = :due_date, status = :status, notes = :notes, updated_at = :now
             WHERE id = :id AND user_id = :owner_id
             RETURNING {LOAN_COLUMNS}"
        ),
        named_params! {
            ":kind": kind,
            ":person": person,
            ":amount": amount,
            ":date": date,
            ":due_date": due_date,
            ":status": status,
            ":notes": notes,
            ":now": OffsetDateTime::now_utc(),
            ":id": id,
            ":owner_id": owner_id,
        },
        map_loan_row,
    )?;

    Ok(loan)
}
