//! Application router configuration.

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use rusqlite::Connection;
use serde::Serialize;
use tower_http::cors::CorsLayer;

use crate::{
    AppState, Error,
    account::{
        create_account_endpoint, delete_account_endpoint, edit_account_endpoint,
        get_account_endpoint, list_accounts_endpoint,
    },
    category::{create_category_endpoint, list_categories_endpoint},
    endpoints,
    loan::{
        create_loan_endpoint, delete_loan_endpoint, edit_loan_endpoint, list_loans_endpoint,
    },
    log_in::log_in_endpoint,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, edit_transaction_endpoint,
        list_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::HEALTH, get(get_health))
        .route(endpoints::LOG_IN, post(log_in_endpoint))
        .route(
            endpoints::ACCOUNTS,
            get(list_accounts_endpoint).post(create_account_endpoint),
        )
        .route(
            endpoints::ACCOUNT,
            get(get_account_endpoint)
                .put(edit_account_endpoint)
                .delete(delete_account_endpoint),
        )
        .route(
            endpoints::TRANSACTIONS,
            get(list_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(
            endpoints::TRANSACTION,
            put(edit_transaction_endpoint).delete(delete_transaction_endpoint),
        )
        .route(
            endpoints::CATEGORIES,
            get(list_categories_endpoint).post(create_category_endpoint),
        )
        .route(
            endpoints::LOANS,
            get(list_loans_endpoint).post(create_loan_endpoint),
        )
        .route(
            endpoints::LOAN,
            put(edit_loan_endpoint).delete(delete_loan_endpoint),
        )
        .fallback(get_404_not_found)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// The state needed to check the server's health.
#[derive(Debug, Clone)]
pub struct HealthState {
    /// The database connection to probe.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for HealthState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The response body reporting the server's health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// The overall status, "ok" when the database is reachable.
    pub status: &'static str,
}

/// A route handler reporting whether the server and its database are
/// reachable.
async fn get_health(State(state): State<HealthState>) -> Result<Json<HealthResponse>, Error> {
    let connection = state.db_connection.lock().map_err(|_| Error::DatabaseLock)?;

    connection.query_one("SELECT 1", [], |row| row.get::<_, i64>(0))?;

    Ok(Json(HealthResponse { status: "ok" }))
}

/// The JSON body returned for routes that do not exist.
async fn get_404_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({"message": "not found"})),
    )
        .into_response()
}

#[cfg(test)]
mod health_tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::State;

    use crate::test_utils::get_test_connection;

    use super::{HealthState, get_health};

    #[tokio::test]
    async fn reports_ok_with_reachable_database() {
        let state = HealthState {
            db_connection: Arc::new(Mutex::new(get_test_connection())),
        };

        let response = get_health(State(state)).await.unwrap();

        assert_eq!(response.status, "ok");
    }
}
