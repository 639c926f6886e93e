//! The derived view engine.
//!
//! Everything displayed on the expenses page is a pure function of the raw
//! ledger and the current [ViewState]: the sorted and filtered table rows,
//! the line and pie chart series, and the running total. The engine never
//! fails; malformed input degrades the view instead of producing errors.

use serde::{Deserialize, Serialize};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::expense::Expense;

/// The expected format for expense dates, e.g. "2024-08-01".
const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// The column to order the expense table by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Keep records in arrival order.
    #[default]
    None,
    /// Ascending by amount.
    Amount,
    /// Ascending by calendar date.
    Date,
    /// Ascending by category name.
    Category,
}

impl SortKey {
    /// The query-string value for this key.
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::None => "none",
            SortKey::Amount => "amount",
            SortKey::Date => "date",
            SortKey::Category => "category",
        }
    }
}

/// The current sort and filter selection, decoded from query parameters.
///
/// A fresh value is built for every request and passed to [compute_view]
/// wholesale; handlers never mutate it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ViewState {
    /// The column to sort by.
    #[serde(default)]
    pub sort: SortKey,
    /// The category to filter by. Absent or empty shows all records.
    #[serde(default)]
    pub filter: Option<String>,
}

impl ViewState {
    /// The active category filter, treating an empty string as no filter.
    pub fn category_filter(&self) -> Option<&str> {
        self.filter.as_deref().filter(|name| !name.is_empty())
    }
}

/// One (label, value) pair in a chart series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    /// The x-axis label (a date) or pie slice name (a category).
    pub label: String,
    /// The amount.
    pub value: f64,
}

/// The outputs derived from the ledger for one view state.
///
/// Always a recomputation, never a cache: the row list is a filtered
/// permutation of the record list and cannot contain records absent from
/// it, nor duplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView {
    /// The sorted, filtered records, in display order.
    pub rows: Vec<Expense>,
    /// One point per table row, pairing its date with its amount. Rows
    /// sharing a date keep separate points; the chart does not aggregate.
    pub line_series: Vec<SeriesPoint>,
    /// Per-category totals over the table rows, one entry per category in
    /// category-set order. Categories with no matching rows appear as zero.
    pub pie_series: Vec<SeriesPoint>,
    /// The sum over the full record list, ignoring the active filter.
    pub total: f64,
}

/// Compute the table rows, chart series, and running total for one request.
///
/// Sorting happens before filtering and is stable: records that compare
/// equal keep their arrival order. Amounts compare with [f64::total_cmp],
/// so a NaN amount orders after every real number deterministically.
/// Unparseable dates order after every valid date. Category names compare
/// in Unicode code point order.
pub fn compute_view(expenses: &[Expense], categories: &[String], view: &ViewState) -> DerivedView {
    let mut rows = expenses.to_vec();

    match view.sort {
        SortKey::None => {}
        SortKey::Amount => rows.sort_by(|a, b| a.amount.total_cmp(&b.amount)),
        SortKey::Date => rows.sort_by_key(|expense| date_sort_key(&expense.date)),
        SortKey::Category => rows.sort_by(|a, b| a.category.cmp(&b.category)),
    }

    if let Some(category) = view.category_filter() {
        rows.retain(|expense| expense.category == category);
    }

    let line_series = rows
        .iter()
        .map(|expense| SeriesPoint {
            label: expense.date.clone(),
            value: expense.amount,
        })
        .collect();

    let pie_series = categories
        .iter()
        .map(|category| SeriesPoint {
            label: category.clone(),
            value: rows
                .iter()
                .filter(|expense| &expense.category == category)
                .map(|expense| expense.amount)
                .sum(),
        })
        .collect();

    let total = expenses.iter().map(|expense| expense.amount).sum();

    DerivedView {
        rows,
        line_series,
        pie_series,
        total,
    }
}

/// Sort key that puts unparseable dates after every valid date.
///
/// `false < true`, so valid dates (parsed to `Some`) come first in
/// chronological order and invalid dates group at the end, where the stable
/// sort preserves their arrival order.
fn date_sort_key(date: &str) -> (bool, Option<Date>) {
    let parsed = Date::parse(date, DATE_FORMAT).ok();
    (parsed.is_none(), parsed)
}

#[cfg(test)]
mod tests {
    use crate::expense::Expense;

    use super::{SortKey, ViewState, compute_view};

    fn seed_expenses() -> Vec<Expense> {
        vec![
            Expense::new(50.0, "Food", "2024-08-01", "Lunch"),
            Expense::new(20.0, "Travel", "2024-08-02", "Taxi"),
            Expense::new(100.0, "Shopping", "2024-08-03", "Groceries"),
        ]
    }

    fn seed_categories() -> Vec<String> {
        vec!["Food".to_owned(), "Travel".to_owned(), "Shopping".to_owned()]
    }

    fn view(sort: SortKey, filter: Option<&str>) -> ViewState {
        ViewState {
            sort,
            filter: filter.map(str::to_owned),
        }
    }

    #[test]
    fn no_sort_no_filter_returns_records_unchanged() {
        let expenses = seed_expenses();

        let derived = compute_view(&expenses, &seed_categories(), &ViewState::default());

        assert_eq!(derived.rows, expenses);
    }

    #[test]
    fn sort_by_amount_orders_ascending() {
        let derived = compute_view(
            &seed_expenses(),
            &seed_categories(),
            &view(SortKey::Amount, None),
        );

        let amounts: Vec<f64> = derived.rows.iter().map(|e| e.amount).collect();
        assert_eq!(amounts, vec![20.0, 50.0, 100.0]);

        let categories: Vec<&str> = derived.rows.iter().map(|e| e.category.as_str()).collect();
        assert_eq!(categories, vec!["Travel", "Food", "Shopping"]);

        assert_eq!(derived.total, 170.0);

        let pie_values: Vec<f64> = derived.pie_series.iter().map(|p| p.value).collect();
        assert_eq!(pie_values, vec![50.0, 20.0, 100.0]);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let expenses = vec![
            Expense::new(10.0, "Food", "2024-08-01", "first"),
            Expense::new(10.0, "Travel", "2024-08-02", "second"),
            Expense::new(5.0, "Food", "2024-08-03", "third"),
            Expense::new(10.0, "Food", "2024-08-04", "fourth"),
        ];

        let derived = compute_view(&expenses, &seed_categories(), &view(SortKey::Amount, None));

        let descriptions: Vec<&str> = derived
            .rows
            .iter()
            .map(|e| e.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["third", "first", "second", "fourth"]);

        // Sorting the already-sorted rows again must not change the order.
        let resorted = compute_view(&derived.rows, &seed_categories(), &view(SortKey::Amount, None));
        assert_eq!(resorted.rows, derived.rows);
    }

    #[test]
    fn sort_by_date_orders_chronologically() {
        let expenses = vec![
            Expense::new(1.0, "Food", "2024-12-25", "christmas"),
            Expense::new(2.0, "Food", "2024-01-01", "new year"),
            Expense::new(3.0, "Food", "2023-06-15", "last year"),
        ];

        let derived = compute_view(&expenses, &seed_categories(), &view(SortKey::Date, None));

        let dates: Vec<&str> = derived.rows.iter().map(|e| e.date.as_str()).collect();
        assert_eq!(dates, vec!["2023-06-15", "2024-01-01", "2024-12-25"]);
    }

    #[test]
    fn invalid_dates_sort_last_in_arrival_order() {
        let expenses = vec![
            Expense::new(1.0, "Food", "not a date", "bad one"),
            Expense::new(2.0, "Food", "2024-08-02", "valid"),
            Expense::new(3.0, "Food", "", "bad two"),
            Expense::new(4.0, "Food", "2024-08-01", "earlier"),
        ];

        let derived = compute_view(&expenses, &seed_categories(), &view(SortKey::Date, None));

        let descriptions: Vec<&str> = derived
            .rows
            .iter()
            .map(|e| e.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["earlier", "valid", "bad one", "bad two"]);
    }

    #[test]
    fn sort_by_category_orders_lexicographically() {
        let derived = compute_view(
            &seed_expenses(),
            &seed_categories(),
            &view(SortKey::Category, None),
        );

        let categories: Vec<&str> = derived.rows.iter().map(|e| e.category.as_str()).collect();
        assert_eq!(categories, vec!["Food", "Shopping", "Travel"]);
    }

    #[test]
    fn filter_keeps_only_matching_category() {
        let mut expenses = seed_expenses();
        expenses.push(Expense::new(30.0, "Food", "2024-08-04", "Dinner"));

        let derived = compute_view(
            &expenses,
            &seed_categories(),
            &view(SortKey::Amount, Some("Food")),
        );

        assert!(derived.rows.iter().all(|e| e.category == "Food"));
        let amounts: Vec<f64> = derived.rows.iter().map(|e| e.amount).collect();
        assert_eq!(amounts, vec![30.0, 50.0]);
    }

    #[test]
    fn filter_scenario_pie_and_total() {
        let derived = compute_view(
            &seed_expenses(),
            &seed_categories(),
            &view(SortKey::None, Some("Food")),
        );

        assert_eq!(derived.rows.len(), 1);
        assert_eq!(derived.rows[0].amount, 50.0);
        assert_eq!(derived.rows[0].category, "Food");

        let pie_values: Vec<f64> = derived.pie_series.iter().map(|p| p.value).collect();
        assert_eq!(pie_values, vec![50.0, 0.0, 0.0]);

        // The total reflects all expenses regardless of the active filter.
        assert_eq!(derived.total, 170.0);
    }

    #[test]
    fn pie_series_sums_match_filtered_rows() {
        let mut expenses = seed_expenses();
        expenses.push(Expense::new(25.0, "Travel", "2024-08-05", "Bus"));

        for filter in [None, Some("Food"), Some("Travel")] {
            let derived = compute_view(&expenses, &seed_categories(), &view(SortKey::None, filter));

            let pie_sum: f64 = derived.pie_series.iter().map(|p| p.value).sum();
            let row_sum: f64 = derived.rows.iter().map(|e| e.amount).sum();
            assert_eq!(pie_sum, row_sum, "mismatch for filter {filter:?}");
        }
    }

    #[test]
    fn total_ignores_sort_and_filter() {
        let expenses = seed_expenses();
        let categories = seed_categories();

        for sort in [SortKey::None, SortKey::Amount, SortKey::Date, SortKey::Category] {
            for filter in [None, Some("Food"), Some("Shopping")] {
                let derived = compute_view(&expenses, &categories, &view(sort, filter));
                assert_eq!(derived.total, 170.0);
            }
        }
    }

    #[test]
    fn line_series_keeps_duplicate_dates() {
        let expenses = vec![
            Expense::new(10.0, "Food", "2024-08-01", "Breakfast"),
            Expense::new(15.0, "Food", "2024-08-01", "Lunch"),
        ];

        let derived = compute_view(&expenses, &seed_categories(), &ViewState::default());

        assert_eq!(derived.line_series.len(), 2);
        assert_eq!(derived.line_series[0].label, "2024-08-01");
        assert_eq!(derived.line_series[1].label, "2024-08-01");
        assert_eq!(derived.line_series[0].value, 10.0);
        assert_eq!(derived.line_series[1].value, 15.0);
    }

    #[test]
    fn empty_filter_string_means_no_filter() {
        let expenses = seed_expenses();

        let derived = compute_view(&expenses, &seed_categories(), &view(SortKey::None, Some("")));

        assert_eq!(derived.rows, expenses);
    }

    #[test]
    fn unknown_filter_category_yields_empty_rows() {
        let derived = compute_view(
            &seed_expenses(),
            &seed_categories(),
            &view(SortKey::None, Some("Utilities")),
        );

        assert!(derived.rows.is_empty());
        assert!(derived.line_series.is_empty());
        let pie_values: Vec<f64> = derived.pie_series.iter().map(|p| p.value).collect();
        assert_eq!(pie_values, vec![0.0, 0.0, 0.0]);
        assert_eq!(derived.total, 170.0);
    }

    #[test]
    fn pie_series_keeps_category_order_with_zeros() {
        let categories = vec![
            "Utilities".to_owned(),
            "Food".to_owned(),
            "Rent".to_owned(),
        ];

        let derived = compute_view(&seed_expenses(), &categories, &ViewState::default());

        let labels: Vec<&str> = derived.pie_series.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Utilities", "Food", "Rent"]);
        let values: Vec<f64> = derived.pie_series.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![0.0, 50.0, 0.0]);
    }
}
