mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod get_endpoint;
mod list_endpoint;

pub use core::{
    ACCOUNT_COLUMNS, Account, apply_balance_delta, create_account_table, get_account,
    map_account_row,
};
pub use create_endpoint::create_account_endpoint;
pub use delete_endpoint::delete_account_endpoint;
pub use edit_endpoint::edit_account_endpoint;
pub use get_endpoint::get_account_endpoint;
pub use list_endpoint::list_accounts_endpoint;
