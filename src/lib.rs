//! Perfin is a personal finance tracker for a single user.
//!
//! This library provides a JSON REST API over a SQLite database that keeps
//! accounts, transactions, categories and lending/borrowing records, and
//! guarantees that each account's stored balance always equals the signed
//! sum of its transactions.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde::Serialize;
use tokio::signal;

mod account;
mod app_state;
mod category;
mod database_id;
mod db;
pub mod endpoints;
mod ledger;
mod loan;
mod log_in;
mod logging;
mod money;
mod routing;
#[cfg(test)]
mod test_utils;
mod transaction;
mod user;

pub use app_state::AppState;
pub use db::initialize as initialize_db;
pub use logging::logging_middleware;
pub use money::Money;
pub use routing::build_router;
pub use user::ensure_user;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The client supplied a password that does not match the application
    /// password.
    #[error("invalid password")]
    InvalidCredentials,

    /// The caller supplied malformed or out-of-range data, detected before
    /// any store mutation was attempted.
    #[error("{0}")]
    InvalidInput(String),

    /// The requested resource was not found, or is not owned by the caller.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// The specified account name already exists in the database.
    #[error("the account \"{0}\" already exists in the database")]
    DuplicateAccountName(String),

    /// The specified category name and kind already exist in the database.
    #[error("the category \"{0}\" already exists in the database")]
    DuplicateCategory(String),

    /// An invariant was found already broken, e.g. a transaction whose
    /// account has vanished. Always surfaced to the caller, never repaired
    /// silently.
    #[error("data integrity violation: {0}")]
    DataIntegrity(String),

    /// Could not acquire the database lock.
    #[error("could not acquire the database lock")]
    DatabaseLock,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

/// The JSON body used for all error responses.
#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status_code, message) = match &self {
            Error::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),
            Error::InvalidInput(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            Error::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            Error::DuplicateAccountName(_) | Error::DuplicateCategory(_) => {
                (StatusCode::CONFLICT, self.to_string())
            }
            Error::DataIntegrity(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred, check the server logs for more details."
                        .to_owned(),
                )
            }
        };

        (status_code, Json(ErrorBody { message })).into_response()
    }
}

#[cfg(test)]
mod error_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::Error;

    #[test]
    fn maps_rusqlite_no_rows_to_not_found() {
        let error = Error::from(rusqlite::Error::QueryReturnedNoRows);

        assert_eq!(error, Error::NotFound);
    }

    #[test]
    fn error_kinds_map_to_status_codes() {
        let cases = [
            (Error::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (
                Error::InvalidInput("amount must be positive".to_owned()),
                StatusCode::BAD_REQUEST,
            ),
            (Error::NotFound, StatusCode::NOT_FOUND),
            (
                Error::DuplicateAccountName("Savings".to_owned()),
                StatusCode::CONFLICT,
            ),
            (
                Error::DataIntegrity("orphaned transaction".to_owned()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (Error::DatabaseLock, StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, want_status) in cases {
            let response = error.into_response();
            assert_eq!(response.status(), want_status);
        }
    }
}
