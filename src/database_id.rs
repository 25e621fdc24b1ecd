//! Type aliases for the integer IDs used in the database.

/// The integer ID type used by all tables.
pub type DatabaseId = i64;

/// The ID of a row in the user table, the owner of all other records.
pub type OwnerId = DatabaseId;

/// The ID of a row in the account table.
pub type AccountId = DatabaseId;

/// The ID of a row in the transaction table.
pub type TransactionId = DatabaseId;

/// The ID of a row in the category table.
pub type CategoryId = DatabaseId;

/// The ID of a row in the loan table.
pub type LoanId = DatabaseId;
