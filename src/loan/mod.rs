mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod list_endpoint;

pub use core::{
    LOAN_COLUMNS, Loan, LoanKind, LoanStatus, create_loan_table, get_loan, map_loan_row,
};
pub use create_endpoint::create_loan_endpoint;
pub use delete_endpoint::delete_loan_endpoint;
pub use edit_endpoint::edit_loan_endpoint;
pub use list_endpoint::list_loans_endpoint;
