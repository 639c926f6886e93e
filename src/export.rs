//! CSV export of the current expense view.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::{AppState, Error, expense::Expense, ledger::Ledger, view::{ViewState, compute_view}};

/// The state needed for exporting expenses as CSV.
#[derive(Debug, Clone)]
pub struct ExportState {
    /// The shared ledger.
    pub ledger: Arc<Mutex<Ledger>>,
}

impl FromRef<AppState> for ExportState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}

/// Serve the visible expenses as a CSV file download.
///
/// The same sort and filter query parameters as the overview page apply, so
/// the file matches the table the user was looking at.
pub async fn export_csv_endpoint(
    State(state): State<ExportState>,
    Query(view): Query<ViewState>,
) -> Result<Response, Error> {
    let ledger = state
        .ledger
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire the ledger lock: {error}"))
        .map_err(|_| Error::LedgerLock)?;

    let derived = compute_view(&ledger.expenses, &ledger.categories, &view);
    let csv = write_csv(&derived.rows)?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"expenses.csv\"",
            ),
        ],
        csv,
    )
        .into_response())
}

/// Serialize `expenses` as CSV with a header row, one record per expense, in
/// the order given.
pub fn write_csv(expenses: &[Expense]) -> Result<String, Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(["Amount", "Category", "Date", "Description"])
        .map_err(|error| Error::Csv(error.to_string()))?;

    for expense in expenses {
        writer
            .write_record([
                &expense.amount.to_string(),
                &expense.category,
                &expense.date,
                &expense.description,
            ])
            .map_err(|error| Error::Csv(error.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|error| Error::Csv(error.to_string()))?;

    String::from_utf8(bytes).map_err(|error| Error::Csv(error.to_string()))
}
