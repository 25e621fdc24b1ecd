mod core;
mod create_endpoint;
mod list_endpoint;

pub use core::{CATEGORY_COLUMNS, Category, create_category_table, map_category_row};
pub use create_endpoint::create_category_endpoint;
pub use list_endpoint::list_categories_endpoint;
