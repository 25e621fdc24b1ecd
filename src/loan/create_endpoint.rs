//! Defines the endpoint for recording a new loan.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
    http::StatusCode,
};
use rusqlite::{Connection, named_params};
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::{
    AppState, Error,
    database_id::OwnerId,
    loan::{LOAN_COLUMNS, Loan, LoanKind, LoanStatus, map_loan_row},
    money::Money,
};

/// The state needed to record a loan.
#[derive(Debug, Clone)]
pub struct CreateLoanState {
    /// The database connection for managing loans.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The ID of the user that owns the loans.
    pub owner_id: OwnerId,
}

impl FromRef<AppState> for CreateLoanState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            owner_id: state.owner_id,
        }
    }
}

/// The request body for recording a loan.
#[derive(Debug, Deserialize)]
pub struct CreateLoanRequest {
    /// Whether the money was lent or borrowed.
    #[serde(rename = "type")]
    pub kind: LoanKind,
    /// The name of the other person.
    pub person: String,
    /// The amount lent or borrowed, must be strictly positive.
    pub amount: Money,
    /// The date the loan was made.
    pub date: Date,
    /// The date the loan is due to be repaid, if agreed.
    #[serde(default)]
    pub due_date: Option<Date>,
    /// The repayment state, defaults to outstanding.
    #[serde(default)]
    pub status: Option<LoanStatus>,
    /// Free-form notes about the loan.
    #[serde(default)]
    pub notes: Option<String>,
}

/// The response body wrapping the recorded loan.
#[derive(Debug, Serialize)]
pub struct CreateLoanResponse {
    /// The loan that was recorded.
    pub loan: Loan,
}

/// A route handler for recording a new loan.
pub async fn create_loan_endpoint(
    State(state): State<CreateLoanState>,
    Json(request): Json<CreateLoanRequest>,
) -> Result<(StatusCode, Json<CreateLoanResponse>), Error> {
    let connection = state.db_connection.lock().map_err(|_| Error::DatabaseLock)?;

    let loan = create_loan(request, state.owner_id, &connection)?;

    Ok((StatusCode::CREATED, Json(CreateLoanResponse { loan })))
}

fn create_loan(
    request: CreateLoanRequest,
    owner_id: OwnerId,
    connection: &Connection,
) -> Result<Loan, Error> {
    if request.person.trim().is_empty() {
        return Err(Error::InvalidInput("person must not be empty".to_owned()));
    }

    if !request.amount.is_positive() {
        return Err(Error::InvalidInput(
            "amount must be a positive number".to_owned(),
        ));
    }

    let now = OffsetDateTime::now_utc();

    let loan = connection.query_one(
        &format!(
            "INSERT INTO loan (user_id, kind, person, amount, date, due_date, status, notes,
                               created_at, updated_at)
             VALUES (:owner_id, :kind, :person, :amount, :date, :due_date, :status, :notes,
                     :now, :now)
             RETURNING {LOAN_COLUMNS}"
        ),
        named_params! {
            ":owner_id": owner_id,
            ":kind": request.kind,
            ":person": request.person,
            ":amount": request.amount,
            ":date": request.date,
            ":due_date": request.due_date,
            ":status": request.status.unwrap_or(LoanStatus::Outstanding),
            ":notes": request.notes,
            ":now": now,
        },
        map_loan_row,
    )?;

    Ok(loan)
}

#[cfg(test)]
mod create_loan_tests {
    use time::macros::date;

    use crate::{
        Error,
        loan::{LoanKind, LoanStatus, get_loan},
        money::Money,
        test_utils::{create_test_owner, get_test_connection},
    };

    use super::{CreateLoanRequest, create_loan};

    fn request(person: &str) -> CreateLoanRequest {
        CreateLoanRequest {
            kind: LoanKind::Lent,
            person: person.to_owned(),
            amount: Money::from_minor_units(50000),
            date: date!(2025 - 05 - 01),
            due_date: None,
            status: None,
            notes: None,
        }
    }

    #[test]
    fn creates_loan_with_outstanding_default() {
        let conn = get_test_connection();
        let owner_id = create_test_owner(&conn);

        let loan = create_loan(request("Asha"), owner_id, &conn).unwrap();

        assert_eq!(loan.person, "Asha");
        assert_eq!(loan.kind, LoanKind::Lent);
        assert_eq!(loan.status, LoanStatus::Outstanding);
        assert_eq!(loan.due_date, None);
        assert_eq!(loan, get_loan(loan.id, owner_id, &conn).unwrap());
    }

    #[test]
    fn keeps_supplied_status_and_due_date() {
        let conn = get_test_connection();
        let owner_id = create_test_owner(&conn);
        let request = CreateLoanRequest {
            status: Some(LoanStatus::Overdue),
            due_date: Some(date!(2025 - 06 - 01)),
            notes: Some("Cash, no interest".to_owned()),
            ..request("Asha")
        };

        let loan = create_loan(request, owner_id, &conn).unwrap();

        assert_eq!(loan.status, LoanStatus::Overdue);
        assert_eq!(loan.due_date, Some(date!(2025 - 06 - 01)));
        assert_eq!(loan.notes.as_deref(), Some("Cash, no interest"));
    }

    #[test]
    fn empty_person_is_rejected() {
        let conn = get_test_connection();
        let owner_id = create_test_owner(&conn);

        let result = create_loan(request("  "), owner_id, &conn);

        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn non_positive_amount_is_rejected() {
        let conn = get_test_connection();
        let owner_id = create_test_owner(&conn);
        let request = CreateLoanRequest {
            amount: Money::ZERO,
            ..request("Asha")
        };

        let result = create_loan(request, owner_id, &conn);

        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }
}
