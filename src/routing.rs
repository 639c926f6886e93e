//! Application router configuration.

use axum::{
    Router,
    response::Response,
    routing::{get, post},
};

use crate::{
    AppState,
    category::create_category_endpoint,
    endpoints,
    expense::create_expense_endpoint,
    export::export_csv_endpoint,
    html::render_internal_server_error,
    not_found::get_404_not_found,
    overview::get_expenses_page,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_expenses_page))
        .route(endpoints::POST_EXPENSE, post(create_expense_endpoint))
        .route(endpoints::POST_CATEGORY, post(create_category_endpoint))
        .route(endpoints::EXPORT_CSV, get(export_csv_endpoint))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .fallback(get_404_not_found)
        .with_state(state)
}

async fn get_internal_server_error_page() -> Response {
    render_internal_server_error()
}
