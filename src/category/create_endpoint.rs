//! Defines the endpoint for creating a new category.

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
    category::{CATEGORY_COLUMNS, Category, map_category_row},
    database_id::OwnerId,
    transaction::Direction,
};

/// The state needed to create a category.
#[derive(Debug, Clone)]
pub struct CreateCategoryState {
    /// The database connection for managing categories.
    pub db_connection: Arc<Mutex<Connection>>,
    /// The ID of the user that owns the categories.
    pub owner_id: OwnerId,
}

impl FromRef<AppState> for CreateCategoryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
            owner_id: state.owner_id,
        }
    }
}

/// The request body for creating a category.
#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    /// The display name of the category, unique per owner and direction.
    pub name: String,
    /// Which direction of transactions the category applies to.
    #[serde(rename = "type")]
    pub kind: Direction,
}

/// The response body wrapping the created category.
#[derive(Debug, Serialize)]
pub struct CreateCategoryResponse {
    /// The category that was created.
    pub category: Category,
}

/// A route handler for creating a new category.
pub async fn create_category_endpoint(
    State(state): State<CreateCategoryState>,
    Json(request): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<CreateCategoryResponse>), Error> {
    let connection = state.db_connection.lock().map_err(|_| Error::DatabaseLock)?;

    let category = create_category(request, state.owner_id, &connection)?;

    Ok((StatusCode::CREATED, Json(CreateCategoryResponse { category })))
}

fn create_category(
    request: CreateCategoryRequest,
    owner_id: OwnerId,
    connection: &Connection,
) -> Result<Category, Error> {
    if request.name.trim().is_empty() {
        return Err(Error::InvalidInput(
            "category name must not be empty".to_owned(),
        ));
    }

    let now = OffsetDateTime::now_utc();

    let category = connection
        .query_one(
            &format!(
                "INSERT INTO category (user_id, name, kind, created_at, updated_at)
                 VALUES (:owner_id, :name, :kind, :now, :now)
                 RETURNING {CATEGORY_COLUMNS}"
            ),
            named_params! {
                ":owner_id": owner_id,
                ":name": request.name,
                ":kind": request.kind,
                ":now": now,
            },
            map_category_row,
        )
        .map_err(|error| match error {
            // Code 2067 occurs when a UNIQUE constraint failed.
            rusqlite::Error::SqliteFailure(error, Some(_)) if error.extended_code == 2067 => {
                Error::DuplicateCategory(request.name.clone())
            }
            error => error.into(),
        })?;

    Ok(category)
}

#[cfg(test)]
mod create_category_tests {
    use crate::{
        Error,
        test_utils::{create_test_owner, get_test_connection},
        transaction::Direction,
    };

    use super::{CreateCategoryRequest, create_category};

    fn request(name: &str, kind: Direction) -> CreateCategoryRequest {
        CreateCategoryRequest {
            name: name.to_owned(),
            kind,
        }
    }

    #[test]
    fn creates_category() {
        let conn = get_test_connection();
        let owner_id = create_test_owner(&conn);

        let category =
            create_category(request("Groceries", Direction::Expense), owner_id, &conn).unwrap();

        assert_eq!(category.name, "Groceries");
        assert_eq!(category.kind, Direction::Expense);
    }

    #[test]
    fn same_name_is_allowed_across_directions() {
        let conn = get_test_connection();
        let owner_id = create_test_owner(&conn);

        create_category(request("Gifts", Direction::Expense), owner_id, &conn).unwrap();
        let result = create_category(request("Gifts", Direction::Income), owner_id, &conn);

        assert!(result.is_ok());
    }

    #[test]
    fn duplicate_name_and_direction_is_rejected() {
        let conn = get_test_connection();
        let owner_id = create_test_owner(&conn);
        create_category(request("Groceries", Direction::Expense), owner_id, &conn).unwrap();

        let result = create_category(request("Groceries", Direction::Expense), owner_id, &conn);

        assert_eq!(result, Err(Error::DuplicateCategory("Groceries".to_owned())));
    }

    #[test]
    fn empty_name_is_rejected() {
        let conn = get_test_connection();
        let owner_id = create_test_owner(&conn);

        let result = create_category(request("  ", Direction::Expense), owner_id, &conn);

        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }
}
