//! Helpers shared by the unit tests.

use rusqlite::{Connection, named_params};
use time::OffsetDateTime;

use crate::{
    account::{ACCOUNT_COLUMNS, Account, map_account_row},
    database_id::OwnerId,
    db::initialize,
    money::Money,
    user::ensure_user,
};

/// Open an in-memory database with the full schema applied.
pub fn get_test_connection() -> Connection {
    let conn = Connection::open_in_memory().expect("Could not open in-memory SQLite database");
    initialize(&conn).expect("Could not initialize database");
    conn
}

/// Provision the test owner and return its ID.
pub fn create_test_owner(connection: &Connection) -> OwnerId {
    ensure_user("test_user", connection).expect("Could not create test user")
}

/// Insert an account with the given `name` and `balance` for `owner_id`.
pub fn create_test_account(
    owner_id: OwnerId,
    name: &str,
    balance: Money,
    connection: &Connection,
) -> Account {
    let now = OffsetDateTime::now_utc();

    connection
        .query_one(
            &format!(
                "INSERT INTO account (user_id, name, kind, balance, currency, created_at, updated_at)
                 VALUES (:owner_id, :name, 'checking', :balance, 'INR', :now, :now)
                 RETURNING {ACCOUNT_COLUMNS}"
            ),
            named_params! {
                ":owner_id": owner_id,
                ":name": name,
                ":balance": balance,
                ":now": now,
            },
            map_account_row,
        )
        .expect("Could not create test account")
}
