//! The in-memory expense ledger and its copy-on-write mutation helpers.

use crate::expense::Expense;

/// The raw application data: expense records and the category set.
///
/// Appends go through [with_expense] and [with_category], which build a
/// new list and leave the old one untouched, so any previously taken
/// snapshot of the data never observes a mutation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    /// Expense records in arrival order.
    pub expenses: Vec<Expense>,
    /// Category names in the order they were added. Append-only;
    /// duplicates and empty names are accepted as given.
    pub categories: Vec<String>,
}

impl Ledger {
    /// An empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed startup data, standing in for a future real data source.
    pub fn seed() -> Self {
        Self {
            expenses: vec![
                Expense::new(50.0, "Food", "2024-08-01", "Lunch"),
                Expense::new(20.0, "Travel", "2024-08-02", "Taxi"),
                Expense::new(100.0, "Shopping", "2024-08-03", "Groceries"),
            ],
            categories: vec!["Food".to_owned(), "Travel".to_owned(), "Shopping".to_owned()],
        }
    }

    /// Append `expense`, replacing the record list with a fresh copy.
    ///
    /// The record is taken as given: the category is not checked against
    /// the category set and the amount may be any value.
    pub fn add_expense(&mut self, expense: Expense) {
        self.expenses = with_expense(&self.expenses, expense);
    }

    /// Append `name` to the category set, replacing it with a fresh copy.
    pub fn add_category(&mut self, name: String) {
        self.categories = with_category(&self.categories, name);
    }
}

/// Build a new record list with `expense` appended. `expenses` is unchanged.
pub fn with_expense(expenses: &[Expense], expense: Expense) -> Vec<Expense> {
    let mut next = expenses.to_vec();
    next.push(expense);
    next
}

/// Build a new category list with `name` appended. `categories` is unchanged.
pub fn with_category(categories: &[String], name: String) -> Vec<String> {
    let mut next = categories.to_vec();
    next.push(name);
    next
}
