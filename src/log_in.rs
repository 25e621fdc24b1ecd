//! Defines the endpoint for logging in with the application password.
//!
//! This is a single-user deployment: there are no per-user credentials, only
//! one application password configured at server start. The endpoint lets a
//! client confirm it holds the right password before using the API.

use axum::{
    Json,
    extract::{FromRef, State},
};
use serde::{Deserialize, Serialize};

use crate::{AppState, Error, app_state::PasswordDigest};

/// The state needed to verify a log-in attempt.
#[derive(Debug, Clone)]
pub struct LogInState {
    /// The digest of the application password.
    pub password_digest: PasswordDigest,
}

impl FromRef<AppState> for LogInState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            password_digest: state.password_digest.clone(),
        }
    }
}

/// The request body for a log-in attempt.
#[derive(Debug, Deserialize)]
pub struct LogInRequest {
    /// The application password to check.
    pub password: String,
}

/// The response body confirming a successful log-in.
#[derive(Debug, Serialize)]
pub struct LogInResponse {
    /// Always true; a failed attempt gets an error response instead.
    pub success: bool,
}

/// A route handler for checking the application password.
///
/// # Errors
/// This function will return an [Error::InvalidCredentials] if the password
/// does not match the configured application password.
pub async fn log_in_endpoint(
    State(state): State<LogInState>,
    Json(request): Json<LogInRequest>,
) -> Result<Json<LogInResponse>, Error> {
    if state.password_digest.matches(&request.password) {
        Ok(Json(LogInResponse { success: true }))
    } else {
        Err(Error::InvalidCredentials)
    }
}
