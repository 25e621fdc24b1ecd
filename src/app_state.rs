//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;
use sha2::{Digest, Sha512};

use crate::{Error, database_id::OwnerId, db::initialize, user::ensure_user};

/// The username of the single user that owns all records.
const DEFAULT_USERNAME: &str = "perfin";

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The database connection.
    pub db_connection: Arc<Mutex<Connection>>,

    /// The ID of the user that owns all records.
    pub owner_id: OwnerId,

    /// The digest of the application password that gates the client.
    pub password_digest: PasswordDigest,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the tables for
    /// the domain models, and provision the user row that owns all records.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(db_connection: Connection, app_password: &str) -> Result<Self, Error> {
        initialize(&db_connection)?;
        let owner_id = ensure_user(DEFAULT_USERNAME, &db_connection)?;

        Ok(Self {
            db_connection: Arc::new(Mutex::new(db_connection)),
            owner_id,
            password_digest: PasswordDigest::new(app_password),
        })
    }
}

/// The SHA-512 digest of the application password.
///
/// The plaintext password is never kept in memory beyond startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordDigest([u8; 64]);

impl PasswordDigest {
    /// Digest `password` for later comparison.
    pub fn new(password: &str) -> Self {
        Self(Sha512::digest(password).into())
    }

    /// Whether `candidate` digests to the same value as the stored password.
    pub fn matches(&self, candidate: &str) -> bool {
        Self::new(candidate) == *self
    }
}
