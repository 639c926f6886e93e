//! The application route URIs.

/// The expenses page. Accepts `sort` and `filter` query parameters.
pub const ROOT: &str = "/";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";

/// The route to create an expense.
pub const POST_EXPENSE: &str = "/api/expenses";
/// The route to create a category.
pub const POST_CATEGORY: &str = "/api/categories";
/// The CSV download of the current table view. Accepts the same query
/// parameters as the expenses page.
pub const EXPORT_CSV: &str = "/expenses.csv";
