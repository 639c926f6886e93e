//! The expense table.

use maud::{Markup, html};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    expense::Expense,
    html::{TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, format_currency},
};

/// The maximum number of graphemes to display for an expense description.
const MAX_DESCRIPTION_GRAPHEMES: usize = 32;

/// Renders the visible expenses as a table.
///
/// Rows appear in the order given, which the caller has already sorted and
/// filtered. An empty slice renders a single placeholder row.
pub(super) fn expenses_table(expenses: &[Expense]) -> Markup {
    html!(
        div class="w-full relative overflow-x-auto rounded-lg"
        {
            table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class="px-6 py-3 text-right" { "Amount" }
                        th scope="col" class="px-6 py-3" { "Category" }
                        th scope="col" class="px-6 py-3" { "Date" }
                        th scope="col" class="px-6 py-3" { "Description" }
                    }
                }

                tbody
                {
                    @if expenses.is_empty() {
                        tr class=(TABLE_ROW_STYLE) data-empty-state="true"
                        {
                            td class=(TABLE_CELL_STYLE) colspan="4"
                            {
                                "No expenses match the current view."
                            }
                        }
                    }

                    @for expense in expenses {
                        tr class=(TABLE_ROW_STYLE)
                        {
                            td class={(TABLE_CELL_STYLE) " text-right"}
                            {
                                (format_currency(expense.amount))
                            }
                            td class=(TABLE_CELL_STYLE) { (expense.category) }
                            td class=(TABLE_CELL_STYLE) { (expense.date) }
                            td class=(TABLE_CELL_STYLE)
                            {
                                (truncate_description(&expense.description))
                            }
                        }
                    }
                }
            }
        }
    )
}

/// Truncate long descriptions so wide text does not stretch the table.
fn truncate_description(description: &str) -> String {
    let grapheme_count = description.graphemes(true).count();

    if grapheme_count <= MAX_DESCRIPTION_GRAPHEMES {
        return description.to_owned();
    }

    let truncated: String = description
        .graphemes(true)
        .take(MAX_DESCRIPTION_GRAPHEMES)
        .collect();

    format!("{truncated}…")
}
