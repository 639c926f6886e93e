//! Expense creation endpoint.

use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{
    AppState, Error, endpoints,
    expense::{Expense, ExpenseFormData, ExpenseFormDefaults, expense_form},
    ledger::Ledger,
};

/// The state needed for creating an expense.
#[derive(Debug, Clone)]
pub struct CreateExpenseState {
    /// The shared ledger.
    pub ledger: Arc<Mutex<Ledger>>,
}

impl FromRef<AppState> for CreateExpenseState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}

/// Handle the add-expense form submission.
///
/// The category, date, and description are stored exactly as submitted,
/// including categories absent from the category set and dates that do not
/// parse. An amount that is not a finite number re-renders the form with an
/// error rather than storing it, since NaN or infinity would poison the
/// running total.
pub async fn create_expense_endpoint(
    State(state): State<CreateExpenseState>,
    Form(form): Form<ExpenseFormData>,
) -> Response {
    let mut ledger = match state.ledger.lock() {
        Ok(ledger) => ledger,
        Err(error) => {
            tracing::error!("could not acquire the ledger lock: {error}");
            return Error::LedgerLock.into_alert_response();
        }
    };

    // parse() accepts "NaN" and "inf", which would poison the total
    let amount = match form.amount.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() => amount,
        _ => {
            let defaults = ExpenseFormDefaults {
                amount: Some(&form.amount),
                category: Some(&form.category),
                date: Some(&form.date),
                description: Some(&form.description),
            };

            return expense_form(
                &ledger.categories,
                &defaults,
                &format!("Error: \"{}\" is not a number", form.amount),
            )
            .into_response();
        }
    };

    ledger.add_expense(Expense {
        amount,
        category: form.category,
        date: form.date,
        description: form.description,
    });

    (
        HxRedirect(endpoints::ROOT.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}
