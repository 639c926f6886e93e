//! Outgoings is a single-page web app for tracking expenses.
//!
//! Expense records and categories live in memory for the lifetime of the
//! server process. Every page load recomputes the table rows, the chart
//! series, and the running total from the raw records via
//! [compute_view]; nothing derived is ever cached or stored.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod category;
mod endpoints;
mod expense;
mod export;
mod html;
mod ledger;
mod not_found;
mod overview;
mod routing;
mod view;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use expense::Expense;
pub use ledger::{Ledger, with_category, with_expense};
pub use routing::build_router;
pub use view::{DerivedView, SeriesPoint, SortKey, ViewState, compute_view};

use crate::{alert::alert_error, not_found::get_404_not_found_response};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
///
/// The derived view engine itself has no error conditions; these cover the
/// delivery layer around it.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// Another request panicked while holding the ledger lock.
    #[error("could not acquire the ledger lock")]
    LedgerLock,

    /// The expense table could not be serialized as CSV.
    #[error("could not write the expense table as CSV: {0}")]
    Csv(String),

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {error}");
                html::render_internal_server_error()
            }
        }
    }
}

impl Error {
    /// A response for htmx form posts, swapped into the page's alert
    /// container instead of replacing the whole document.
    fn into_alert_response(self) -> Response {
        match self {
            Error::LedgerLock => (
                StatusCode::INTERNAL_SERVER_ERROR,
                alert_error(
                    "Something went wrong",
                    "The server could not access the expense data. Try refreshing the page.",
                ),
            )
                .into_response(),
            error => (
                StatusCode::INTERNAL_SERVER_ERROR,
                alert_error(
                    "Something went wrong",
                    &format!("An unexpected error occurred: {error}"),
                ),
            )
                .into_response(),
        }
    }
}
