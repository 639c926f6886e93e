//! The overview page handler and view rendering.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    category::category_form,
    expense::{ExpenseFormDefaults, expense_form},
    html::{CARD_STYLE, HeadElement, PAGE_CONTAINER_STYLE, base, format_currency},
    ledger::Ledger,
    overview::{
        charts::{
            OverviewChart, category_pie_chart, charts_script, charts_view, expenses_line_chart,
        },
        controls::{export_link, view_controls},
        tables::expenses_table,
    },
    view::{DerivedView, ViewState, compute_view},
};

const ECHARTS_SCRIPT_URL: &str = "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";

/// The state needed for displaying the overview page.
#[derive(Debug, Clone)]
pub struct OverviewState {
    /// The shared ledger.
    pub ledger: Arc<Mutex<Ledger>>,
}

impl FromRef<AppState> for OverviewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}

/// Display the expense overview.
///
/// The sort and filter settings arrive in the query string and apply only to
/// this render. Loading the page without a query string always shows the
/// unsorted, unfiltered view.
pub async fn get_expenses_page(
    State(state): State<OverviewState>,
    Query(view): Query<ViewState>,
) -> Result<Response, Error> {
    let ledger = state
        .ledger
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire the ledger lock: {error}"))
        .map_err(|_| Error::LedgerLock)?;

    let derived = compute_view(&ledger.expenses, &ledger.categories, &view);

    Ok(overview_page(&derived, &ledger.categories, &view).into_response())
}

fn overview_page(derived: &DerivedView, categories: &[String], view: &ViewState) -> Markup {
    let charts = [
        OverviewChart {
            id: "expenses-line-chart",
            options: expenses_line_chart(&derived.line_series).to_string(),
        },
        OverviewChart {
            id: "category-pie-chart",
            options: category_pie_chart(&derived.pie_series).to_string(),
        },
    ];

    let content = html!(
        div
            class={(PAGE_CONTAINER_STYLE) " max-w-screen-xl gap-4"}
        {
            header class="w-full flex flex-wrap items-end justify-between gap-4"
            {
                h1 class="text-3xl font-bold" { "Expenses" }

                p class="text-xl" data-total="true"
                {
                    "Total: " (format_currency(derived.total))
                }
            }

            div class=(CARD_STYLE)
            {
                div class="flex flex-col gap-4"
                {
                    (view_controls(categories, view))
                    (export_link(view))
                }
            }

            (charts_view(&charts))

            div class=(CARD_STYLE)
            {
                (expenses_table(&derived.rows))
            }

            div class="w-full grid grid-cols-1 xl:grid-cols-2 gap-4"
            {
                div class=(CARD_STYLE)
                {
                    h2 class="text-xl font-semibold mb-4" { "Add Expense" }
                    (expense_form(categories, &ExpenseFormDefaults::default(), ""))
                }

                div class=(CARD_STYLE)
                {
                    h2 class="text-xl font-semibold mb-4" { "Add Category" }
                    (category_form())
                }
            }
        }
    );

    let scripts = [
        HeadElement::ScriptLink(ECHARTS_SCRIPT_URL.to_owned()),
        charts_script(&charts),
    ];

    base("Expenses", &scripts, &content)
}
