//! The expense record.

use serde::{Deserialize, Serialize};

/// One expense entry. Immutable once added; there is no edit or delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The amount spent.
    pub amount: f64,
    /// The category name. Not checked against the category set.
    pub category: String,
    /// The calendar date as an ISO 8601 string, e.g. "2024-08-01", kept
    /// exactly as submitted whether it parses or not.
    pub date: String,
    /// Free-text description.
    pub description: String,
}

impl Expense {
    /// Build a record from borrowed fields.
    pub fn new(amount: f64, category: &str, date: &str, description: &str) -> Self {
        Self {
            amount,
            category: category.to_owned(),
            date: date.to_owned(),
            description: description.to_owned(),
        }
    }
}

/// Form data for creating an expense.
///
/// The amount arrives as text so that a non-numeric value can be reported
/// back on the form instead of failing form deserialization with a bare
/// 422.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExpenseFormData {
    /// The submitted amount, unparsed.
    pub amount: String,
    /// The selected category name.
    pub category: String,
    /// The submitted date string.
    pub date: String,
    /// Free-text description.
    pub description: String,
}
