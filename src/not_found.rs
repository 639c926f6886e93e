//! The 404 page.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::html::error_view;

/// The fallback route handler.
pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

/// Render the 404 page as a response.
pub fn get_404_not_found_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        error_view(
            "Not Found",
            "404",
            "Sorry, this page does not exist.",
            "Check the URL or head back to the expense overview",
        ),
    )
        .into_response()
}
