//! Defines the endpoint for listing all of the owner's categories.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, State},
};
use rusqlite::{Connection, named_params};
use serde::Serialize;

use crate::{
    AppState, Error,
    category::{CATEGORY_COLUMNS, Category, map_category_row},
    database_id::OwnerId,
};

/// The state needed to list categories.
#[derive(Debug, Clone)]
pub struct ListCategoriesState {
    /// The database connection for managing categories.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The ID of the user that owns the categories.
    pub owner_id: OwnerId,
}

impl FromRef<AppState> for ListCategoriesState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            owner_id: state.owner_id,
        }
    }
}

/// The response body listing all of the owner's categories.
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    /// The owner's categories in alphabetical order.
    pub categories: Vec<Category>,
}

/// A route handler for listing all of the owner's categories.
pub async fn list_categories_endpoint(
    State(state): State<ListCategoriesState>,
) -> Result<Json<CategoriesResponse>, Error> {
    let connection = state.db_connection.lock().map_err(|_| Error::DatabaseLock)?;

    let categories = list_categories(state.owner_id, &connection)?;

    Ok(Json(CategoriesResponse { categories }))
}

fn list_categories(owner_id: OwnerId, connection: &Connection) -> Result<Vec<Category>, Error> {
    connection
        .prepare(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM category WHERE user_id = :owner_id ORDER BY name ASC"
        ))?
        .query_map(named_params! {":owner_id": owner_id}, map_category_row)?
        .map(|maybe_category| maybe_category.map_err(Error::from))
        .collect()
}
