//! The ledger consistency service.
//!
//! This module is the exclusive gateway through which a transaction mutation
//! may change an account's stored balance. Every operation runs as one
//! transactional unit against the store: the [rusqlite::Transaction] handle
//! rolls back when dropped without a commit, so any early return reverts
//! every partial mutation already applied within the call.
//!
//! The balance itself is never read-modified-written here. Each operation
//! hands the store a signed delta ([Direction::delta]) which SQLite applies
//! relative to the current value, so concurrent callers cannot lose updates.

use rusqlite::{Connection, named_params};
use serde::Deserialize;
use time::{Date, OffsetDateTime};

use crate::{
    Error,
    account::apply_balance_delta,
    database_id::{AccountId, OwnerId, TransactionId},
    money::Money,
    transaction::{
        Direction, TRANSACTION_COLUMNS, Transaction, get_transaction, map_transaction_row,
    },
};

/// The fields needed to record a new transaction.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTransaction {
    /// The ID of the account the transaction affects.
    pub account_id: AccountId,
    /// The magnitude of the transaction, must be strictly positive.
    pub amount: Money,
    /// Whether the amount was earned or spent.
    pub direction: Direction,
    /// A text description of what the transaction was for.
    pub description: String,
    /// The category the transaction belongs to.
    pub category: String,
    /// The calendar date when the transaction happened.
    pub date: Date,
}

/// A partial set of transaction fields for a revision. Unset fields are left
/// unchanged. Changing `account_id` moves the transaction between accounts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionUpdate {
    /// The new account for the transaction.
    pub account_id: Option<AccountId>,
    /// The new magnitude, must be strictly positive.
    pub amount: Option<Money>,
    /// The new direction.
    pub direction: Option<Direction>,
    /// The new description.
    pub description: Option<String>,
    /// The new category.
    pub category: Option<String>,
    /// The new transaction date.
    pub date: Option<Date>,
}

/// The outcome of recording or revising a transaction: the transaction plus
/// the authoritative new balance of its account, so the caller never needs
/// to recompute it.
#[derive(Debug, Clone, PartialEq)]
pub struct PostedTransaction {
    /// The transaction as stored.
    pub transaction: Transaction,
    /// The new balance of the transaction's account.
    pub account_balance: Money,
}

/// The outcome of removing a transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct RemovedTransaction {
    /// The ID of the transaction that was removed.
    pub id: TransactionId,
    /// The account the transaction affected.
    pub account_id: AccountId,
    /// The new balance of that account after the reversal.
    pub account_balance: Money,
}

/// Record a new transaction and apply its delta to the referenced account,
/// as one atomic unit.
///
/// # Errors
/// This function will return a:
/// - [Error::InvalidInput] if the amount is not strictly positive or the
///   description or category is empty, detected before any mutation,
/// - [Error::NotFound] if the account does not exist or is not owned by
///   `owner_id`; the transaction insert does not persist in this case,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn record_transaction(
    new: NewTransaction,
    owner_id: OwnerId,
    connection: &mut Connection,
) -> Result<PostedTransaction, Error> {
    validate_amount(new.amount)?;
    validate_text(&new.description, "description")?;
    validate_text(&new.category, "category")?;

    let unit = connection.transaction()?;

    let transaction = insert_transaction(&new, owner_id, &unit)?;
    let account_balance = apply_balance_delta(
        transaction.account_id,
        owner_id,
        transaction.direction.delta(transaction.amount),
        &unit,
    )?;

    unit.commit()?;

    Ok(PostedTransaction {
        transaction,
        account_balance,
    })
}

/// Apply a partial update to a transaction, keeping its account's balance
/// (and, on a move, both accounts' balances) consistent, as one atomic unit.
///
/// The prior effect is reversed on the current account, the merged fields
/// are written, and the forward delta is applied to the (possibly new)
/// account. Any failure after the reversal rolls the reversal back too.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if the transaction, its current account or the new
///   account does not resolve under `owner_id`,
/// - [Error::InvalidInput] if a supplied amount is not strictly positive or
///   a supplied description or category is empty,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn revise_transaction(
    id: TransactionId,
    update: TransactionUpdate,
    owner_id: OwnerId,
    connection: &mut Connection,
) -> Result<PostedTransaction, Error> {
    let unit = connection.transaction()?;

    let current = get_transaction(id, owner_id, &unit)?;

    // Reverse the prior effect on the current account. The account must
    // still exist for the revision to make sense.
    apply_balance_delta(
        current.account_id,
        owner_id,
        -current.direction.delta(current.amount),
        &unit,
    )?;

    let account_id = update.account_id.unwrap_or(current.account_id);
    let amount = update.amount.unwrap_or(current.amount);
    let direction = update.direction.unwrap_or(current.direction);
    let description = update.description.unwrap_or(current.description);
    let category = update.category.unwrap_or(current.category);
    let date = update.date.unwrap_or(current.date);

    // A validation failure here still reverts the reversal above, because
    // the unit is dropped without a commit.
    validate_amount(amount)?;
    validate_text(&description, "description")?;
    validate_text(&category, "category")?;

    let transaction = unit
        .query_one(
            &format!(
                "UPDATE \"transaction\"
                 SET account_id = :account_id, amount = :amount, direction = :direction,
                     description = :description, category = :category, date = :date,
                     updated_at = :now
                 WHERE id = :id AND user_id = :owner_id
                 RETURNING {TRANSACTION_COLUMNS}"
            ),
            named_params! {
                ":account_id": account_id,
                ":amount": amount,
                ":direction": direction,
                ":description": description,
                ":category": category,
                ":date": date,
                ":now": OffsetDateTime::now_utc(),
                ":id": id,
                ":owner_id": owner_id,
            },
            map_transaction_row,
        )
        .map_err(|error| match error {
            // Code 787 occurs when a FOREIGN KEY constraint failed: moving
            // the transaction to an account that does not exist.
            rusqlite::Error::SqliteFailure(error, Some(_)) if error.extended_code == 787 => {
                Error::NotFound
            }
            error => error.into(),
        })?;

    let account_balance = apply_balance_delta(
        transaction.account_id,
        owner_id,
        transaction.direction.delta(transaction.amount),
        &unit,
    )?;

    unit.commit()?;

    Ok(PostedTransaction {
        transaction,
        account_balance,
    })
}

/// Delete a transaction and reverse its effect on its account, as one atomic
/// unit.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if the transaction does not resolve under `owner_id`,
/// - [Error::DataIntegrity] if the transaction's account no longer exists.
///   This signals a broken reference; the delete is rolled back so no
///   further state is lost,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn remove_transaction(
    id: TransactionId,
    owner_id: OwnerId,
    connection: &mut Connection,
) -> Result<RemovedTransaction, Error> {
    let unit = connection.transaction()?;

    let current = get_transaction(id, owner_id, &unit)?;

    unit.execute(
        "DELETE FROM \"transaction\" WHERE id = :id AND user_id = :owner_id",
        named_params! {":id": id, ":owner_id": owner_id},
    )?;

    let account_balance = apply_balance_delta(
        current.account_id,
        owner_id,
        -current.direction.delta(current.amount),
        &unit,
    )
    .map_err(|error| match error {
        Error::NotFound => Error::DataIntegrity(format!(
            "transaction {id} references account {} which no longer exists",
            current.account_id
        )),
        error => error,
    })?;

    unit.commit()?;

    Ok(RemovedTransaction {
        id,
        account_id: current.account_id,
        account_balance,
    })
}

fn insert_transaction(
    new: &NewTransaction,
    owner_id: OwnerId,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let now = OffsetDateTime::now_utc();

    let transaction = connection
        .query_one(
            &format!(
                "INSERT INTO \"transaction\"
                     (user_id, account_id, amount, direction, description, category, date,
                      created_at, updated_at)
                 VALUES (:owner_id, :account_id, :amount, :direction, :description, :category,
                         :date, :now, :now)
                 RETURNING {TRANSACTION_COLUMNS}"
            ),
            named_params! {
                ":owner_id": owner_id,
                ":account_id": new.account_id,
                ":amount": new.amount,
                ":direction": new.direction,
                ":description": new.description,
                ":category": new.category,
                ":date": new.date,
                ":now": now,
            },
            map_transaction_row,
        )
        .map_err(|error| match error {
            // Code 787 occurs when a FOREIGN KEY constraint failed: the
            // referenced account does not exist at all.
            rusqlite::Error::SqliteFailure(error, Some(_)) if error.extended_code == 787 => {
                Error::NotFound
            }
            error => error.into(),
        })?;

    Ok(transaction)
}

fn validate_amount(amount: Money) -> Result<(), Error> {
    if amount.is_positive() {
        Ok(())
    } else {
        Err(Error::InvalidInput(
            "amount must be a positive number".to_owned(),
        ))
    }
}

fn validate_text(text: &str, field: &str) -> Result<(), Error> {
    if text.trim().is_empty() {
        Err(Error::InvalidInput(format!("{field} must not be empty")))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod ledger_tests {
    use std::{
        sync::{Arc, Mutex},
        thread,
    };

    use rusqlite::{Connection, named_params};
    use time::macros::date;

    use crate::{
        Error,
        account::{Account, get_account},
        database_id::{AccountId, OwnerId},
        money::Money,
        test_utils::{create_test_account, create_test_owner, get_test_connection},
        transaction::{Direction, get_transaction},
        user::ensure_user,
    };

    use super::{
        NewTransaction, TransactionUpdate, record_transaction, remove_transaction,
        revise_transaction,
    };

    fn new_transaction(account_id: AccountId, cents: i64, direction: Direction) -> NewTransaction {
        NewTransaction {
            account_id,
            amount: Money::from_minor_units(cents),
            direction,
            description: "Test transaction".to_owned(),
            category: "Misc".to_owned(),
            date: date!(2025 - 06 - 15),
        }
    }

    /// Check the core invariant: every account's stored balance equals its
    /// seed balance plus the signed sum of its surviving transactions.
    #[track_caller]
    fn assert_balance_invariant(seeds: &[(AccountId, Money)], connection: &Connection) {
        for &(account_id, seed) in seeds {
            let balance: Money = connection
                .query_one(
                    "SELECT balance FROM account WHERE id = :account_id",
                    named_params! {":account_id": account_id},
                    |row| row.get(0),
                )
                .unwrap();

            let signed_sum: Money = connection
                .query_one(
                    "SELECT COALESCE(SUM(
                         CASE direction WHEN 'income' THEN amount ELSE -amount END
                     ), 0)
                     FROM \"transaction\" WHERE account_id = :account_id",
                    named_params! {":account_id": account_id},
                    |row| row.get(0),
                )
                .unwrap();

            assert_eq!(
                balance,
                seed + signed_sum,
                "account {account_id}: stored balance {balance} != seed {seed} + signed sum {signed_sum}"
            );
        }
    }

    fn setup(seed_cents: i64) -> (Connection, OwnerId, Account) {
        let conn = get_test_connection();
        let owner_id = create_test_owner(&conn);
        let account =
            create_test_account(owner_id, "Checking", Money::from_minor_units(seed_cents), &conn);

        (conn, owner_id, account)
    }

    #[test]
    fn record_income_then_expense_updates_balance() {
        let (mut conn, owner_id, account) = setup(5000);

        let posted =
            record_transaction(new_transaction(account.id, 10000, Direction::Income), owner_id, &mut conn)
                .unwrap();
        assert_eq!(posted.account_balance, Money::from_minor_units(15000));

        let posted =
            record_transaction(new_transaction(account.id, 3000, Direction::Expense), owner_id, &mut conn)
                .unwrap();
        assert_eq!(posted.account_balance, Money::from_minor_units(12000));

        assert_balance_invariant(&[(account.id, Money::from_minor_units(5000))], &conn);
    }

    #[test]
    fn record_returns_stored_transaction() {
        let (mut conn, owner_id, account) = setup(0);

        let posted =
            record_transaction(new_transaction(account.id, 1234, Direction::Income), owner_id, &mut conn)
                .unwrap();

        let stored = get_transaction(posted.transaction.id, owner_id, &conn).unwrap();
        assert_eq!(posted.transaction, stored);
        assert_eq!(stored.amount, Money::from_minor_units(1234));
        assert_eq!(stored.direction, Direction::Income);
    }

    #[test]
    fn record_fails_with_not_found_for_missing_account() {
        let (mut conn, owner_id, _account) = setup(0);

        let result =
            record_transaction(new_transaction(999, 1000, Direction::Income), owner_id, &mut conn);

        assert_eq!(result, Err(Error::NotFound));
        assert_transaction_count(&conn, 0);
    }

    #[test]
    fn record_fails_with_not_found_for_foreign_owner_account() {
        let (mut conn, _owner_id, account) = setup(0);
        let other_owner = ensure_user("someone_else", &conn).unwrap();

        let result = record_transaction(
            new_transaction(account.id, 1000, Direction::Income),
            other_owner,
            &mut conn,
        );

        assert_eq!(result, Err(Error::NotFound));
        // All-or-nothing: the insert must not persist.
        assert_transaction_count(&conn, 0);
        assert_balance_invariant(&[(account.id, Money::ZERO)], &conn);
    }

    #[test]
    fn record_rejects_non_positive_amount() {
        let (mut conn, owner_id, account) = setup(0);

        for cents in [0, -100] {
            let result = record_transaction(
                new_transaction(account.id, cents, Direction::Income),
                owner_id,
                &mut conn,
            );

            assert!(matches!(result, Err(Error::InvalidInput(_))));
        }

        assert_transaction_count(&conn, 0);
        assert_eq!(
            get_account(account.id, owner_id, &conn).unwrap().balance,
            Money::ZERO
        );
    }

    #[test]
    fn record_rejects_empty_description_and_category() {
        let (mut conn, owner_id, account) = setup(0);

        let blank_description = NewTransaction {
            description: " ".to_owned(),
            ..new_transaction(account.id, 1000, Direction::Income)
        };
        let blank_category = NewTransaction {
            category: String::new(),
            ..new_transaction(account.id, 1000, Direction::Income)
        };

        for new in [blank_description, blank_category] {
            let result = record_transaction(new, owner_id, &mut conn);
            assert!(matches!(result, Err(Error::InvalidInput(_))));
        }

        assert_transaction_count(&conn, 0);
    }

    #[test]
    fn revise_amount_only_adjusts_balance_by_difference() {
        let (mut conn, owner_id, account) = setup(0);
        let posted =
            record_transaction(new_transaction(account.id, 10000, Direction::Income), owner_id, &mut conn)
                .unwrap();
        assert_eq!(posted.account_balance, Money::from_minor_units(10000));

        let revised = revise_transaction(
            posted.transaction.id,
            TransactionUpdate {
                amount: Some(Money::from_minor_units(4000)),
                ..Default::default()
            },
            owner_id,
            &mut conn,
        )
        .unwrap();

        // 100.00 -> 40.00 on an income reduces the balance by 60.00.
        assert_eq!(revised.account_balance, Money::from_minor_units(4000));
        assert_eq!(revised.transaction.amount, Money::from_minor_units(4000));
        assert_balance_invariant(&[(account.id, Money::ZERO)], &conn);
    }

    #[test]
    fn revise_direction_flip_reverses_effect() {
        let (mut conn, owner_id, account) = setup(0);
        let posted =
            record_transaction(new_transaction(account.id, 2500, Direction::Expense), owner_id, &mut conn)
                .unwrap();
        assert_eq!(posted.account_balance, Money::from_minor_units(-2500));

        let revised = revise_transaction(
            posted.transaction.id,
            TransactionUpdate {
                direction: Some(Direction::Income),
                ..Default::default()
            },
            owner_id,
            &mut conn,
        )
        .unwrap();

        assert_eq!(revised.account_balance, Money::from_minor_units(2500));
        assert_balance_invariant(&[(account.id, Money::ZERO)], &conn);
    }

    #[test]
    fn revise_moves_transaction_between_accounts() {
        let mut conn = get_test_connection();
        let owner_id = create_test_owner(&conn);
        let account_a =
            create_test_account(owner_id, "A", Money::from_minor_units(14000), &conn);
        let account_b = create_test_account(owner_id, "B", Money::from_minor_units(5000), &conn);

        let posted = record_transaction(
            new_transaction(account_a.id, 2000, Direction::Expense),
            owner_id,
            &mut conn,
        )
        .unwrap();
        assert_eq!(posted.account_balance, Money::from_minor_units(12000));

        let revised = revise_transaction(
            posted.transaction.id,
            TransactionUpdate {
                account_id: Some(account_b.id),
                ..Default::default()
            },
            owner_id,
            &mut conn,
        )
        .unwrap();

        // A gets the expense reversed, B takes it on.
        assert_eq!(
            get_account(account_a.id, owner_id, &conn).unwrap().balance,
            Money::from_minor_units(14000)
        );
        assert_eq!(revised.transaction.account_id, account_b.id);
        assert_eq!(revised.account_balance, Money::from_minor_units(3000));
        assert_balance_invariant(
            &[
                (account_a.id, Money::from_minor_units(14000)),
                (account_b.id, Money::from_minor_units(5000)),
            ],
            &conn,
        );
    }

    #[test]
    fn revise_fails_with_not_found_for_missing_transaction() {
        let (mut conn, owner_id, _account) = setup(0);

        let result =
            revise_transaction(999, TransactionUpdate::default(), owner_id, &mut conn);

        assert_eq!(result, Err(Error::NotFound));
    }

    #[test]
    fn revise_with_invalid_amount_rolls_back_everything() {
        let (mut conn, owner_id, account) = setup(0);
        let posted =
            record_transaction(new_transaction(account.id, 10000, Direction::Income), owner_id, &mut conn)
                .unwrap();

        let result = revise_transaction(
            posted.transaction.id,
            TransactionUpdate {
                amount: Some(Money::ZERO),
                ..Default::default()
            },
            owner_id,
            &mut conn,
        );

        assert!(matches!(result, Err(Error::InvalidInput(_))));
        // The validation failure happens after the reversal step, which must
        // also be rolled back: no partial state survives.
        assert_eq!(
            get_account(account.id, owner_id, &conn).unwrap().balance,
            Money::from_minor_units(10000)
        );
        assert_eq!(
            get_transaction(posted.transaction.id, owner_id, &conn).unwrap(),
            posted.transaction
        );
        assert_balance_invariant(&[(account.id, Money::ZERO)], &conn);
    }

    #[test]
    fn revise_move_to_missing_account_rolls_back_everything() {
        let (mut conn, owner_id, account) = setup(0);
        let posted =
            record_transaction(new_transaction(account.id, 5000, Direction::Expense), owner_id, &mut conn)
                .unwrap();

        let result = revise_transaction(
            posted.transaction.id,
            TransactionUpdate {
                account_id: Some(999),
                ..Default::default()
            },
            owner_id,
            &mut conn,
        );

        assert_eq!(result, Err(Error::NotFound));
        assert_eq!(
            get_account(account.id, owner_id, &conn).unwrap().balance,
            Money::from_minor_units(-5000)
        );
        assert_eq!(
            get_transaction(posted.transaction.id, owner_id, &conn).unwrap(),
            posted.transaction
        );
        assert_balance_invariant(&[(account.id, Money::ZERO)], &conn);
    }

    #[test]
    fn remove_expense_restores_balance() {
        let (mut conn, owner_id, account) = setup(10000);
        let posted =
            record_transaction(new_transaction(account.id, 2500, Direction::Expense), owner_id, &mut conn)
                .unwrap();
        assert_eq!(posted.account_balance, Money::from_minor_units(7500));

        let removed = remove_transaction(posted.transaction.id, owner_id, &mut conn).unwrap();

        assert_eq!(removed.account_balance, Money::from_minor_units(10000));
        assert_eq!(
            get_transaction(posted.transaction.id, owner_id, &conn),
            Err(Error::NotFound)
        );
        assert_balance_invariant(&[(account.id, Money::from_minor_units(10000))], &conn);
    }

    #[test]
    fn remove_fails_with_not_found_for_missing_transaction() {
        let (mut conn, owner_id, _account) = setup(0);

        let result = remove_transaction(999, owner_id, &mut conn);

        assert_eq!(result, Err(Error::NotFound));
    }

    #[test]
    fn remove_with_vanished_account_reports_data_integrity() {
        let (mut conn, owner_id, account) = setup(0);
        let posted =
            record_transaction(new_transaction(account.id, 1000, Direction::Income), owner_id, &mut conn)
                .unwrap();

        // Simulate legacy data written without foreign key enforcement: the
        // account row vanishes while the transaction row survives.
        conn.pragma_update(None, "foreign_keys", false).unwrap();
        conn.execute(
            "DELETE FROM account WHERE id = :id",
            named_params! {":id": account.id},
        )
        .unwrap();
        conn.pragma_update(None, "foreign_keys", true).unwrap();

        let result = remove_transaction(posted.transaction.id, owner_id, &mut conn);

        assert!(
            matches!(result, Err(Error::DataIntegrity(_))),
            "expected DataIntegrity, got {result:?}"
        );
        // The delete must be rolled back so no further state is lost.
        assert_eq!(
            get_transaction(posted.transaction.id, owner_id, &conn).unwrap(),
            posted.transaction
        );
    }

    #[test]
    fn concurrent_records_converge_to_exact_sum() {
        let (conn, owner_id, account) = setup(10000);
        let connection = Arc::new(Mutex::new(conn));

        const THREADS: usize = 8;
        const RECORDS_PER_THREAD: usize = 5;
        const AMOUNT_CENTS: i64 = 1000;

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let connection = Arc::clone(&connection);
                let account_id = account.id;

                thread::spawn(move || {
                    for _ in 0..RECORDS_PER_THREAD {
                        let mut guard = connection.lock().unwrap();
                        record_transaction(
                            new_transaction(account_id, AMOUNT_CENTS, Direction::Income),
                            owner_id,
                            &mut guard,
                        )
                        .unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let conn = connection.lock().unwrap();
        let want = 10000 + (THREADS * RECORDS_PER_THREAD) as i64 * AMOUNT_CENTS;
        assert_eq!(
            get_account(account.id, owner_id, &conn).unwrap().balance,
            Money::from_minor_units(want)
        );
        assert_balance_invariant(&[(account.id, Money::from_minor_units(10000))], &conn);
    }

    #[test]
    fn invariant_holds_after_mixed_operation_sequence() {
        let mut conn = get_test_connection();
        let owner_id = create_test_owner(&conn);
        let checking = create_test_account(owner_id, "Checking", Money::ZERO, &conn);
        let savings = create_test_account(owner_id, "Savings", Money::ZERO, &conn);

        let salary = record_transaction(
            new_transaction(checking.id, 250000, Direction::Income),
            owner_id,
            &mut conn,
        )
        .unwrap();
        let rent = record_transaction(
            new_transaction(checking.id, 120000, Direction::Expense),
            owner_id,
            &mut conn,
        )
        .unwrap();
        record_transaction(
            new_transaction(savings.id, 50000, Direction::Income),
            owner_id,
            &mut conn,
        )
        .unwrap();

        revise_transaction(
            salary.transaction.id,
            TransactionUpdate {
                amount: Some(Money::from_minor_units(260000)),
                ..Default::default()
            },
            owner_id,
            &mut conn,
        )
        .unwrap();
        revise_transaction(
            rent.transaction.id,
            TransactionUpdate {
                account_id: Some(savings.id),
                ..Default::default()
            },
            owner_id,
            &mut conn,
        )
        .unwrap();
        remove_transaction(rent.transaction.id, owner_id, &mut conn).unwrap();

        assert_balance_invariant(
            &[(checking.id, Money::ZERO), (savings.id, Money::ZERO)],
            &conn,
        );
        assert_eq!(
            get_account(checking.id, owner_id, &conn).unwrap().balance,
            Money::from_minor_units(260000)
        );
        assert_eq!(
            get_account(savings.id, owner_id, &conn).unwrap().balance,
            Money::from_minor_units(50000)
        );
    }

    #[track_caller]
    fn assert_transaction_count(connection: &Connection, want: i64) {
        let count: i64 = connection
            .query_one("SELECT COUNT(id) FROM \"transaction\"", [], |row| row.get(0))
            .unwrap();

        assert_eq!(count, want);
    }
}
