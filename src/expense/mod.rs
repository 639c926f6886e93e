//! Expense records: the domain model, form markup, and creation endpoint.

mod create_endpoint;
mod form;
mod model;

pub use create_endpoint::create_expense_endpoint;
pub use form::{ExpenseFormDefaults, expense_form};
pub use model::{Expense, ExpenseFormData};
