//! Category creation form and endpoint.
//!
//! The category set is deliberately permissive: names append
//! unconditionally, so duplicates and empty strings are stored as given.
//! Tightening this would change observable behavior, so it is left alone.

use std::sync::{Arc, Mutex};

use axum::{
    Form,
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use maud::{Markup, html};
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error, endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
    ledger::Ledger,
};

/// The state needed for creating a category.
#[derive(Debug, Clone)]
pub struct CreateCategoryState {
    /// The shared ledger.
    pub ledger: Arc<Mutex<Ledger>>,
}

impl FromRef<AppState> for CreateCategoryState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger: state.ledger.clone(),
        }
    }
}

/// Form data for category creation.
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryFormData {
    /// The submitted category name.
    pub name: String,
}

/// Handle the add-category form submission.
pub async fn create_category_endpoint(
    State(state): State<CreateCategoryState>,
    Form(new_category): Form<CategoryFormData>,
) -> Response {
    let mut ledger = match state.ledger.lock() {
        Ok(ledger) => ledger,
        Err(error) => {
            tracing::error!("could not acquire the ledger lock: {error}");
            return Error::LedgerLock.into_alert_response();
        }
    };

    ledger.add_category(new_category.name);

    (
        HxRedirect(endpoints::ROOT.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}

/// Render the add-category form.
pub fn category_form() -> Markup {
    html! {
        form
            hx-post=(endpoints::POST_CATEGORY)
            hx-target-error="#alert-container"
            class="w-full space-y-4"
        {
            div
            {
                label
                    for="name"
                    class=(FORM_LABEL_STYLE)
                {
                    "New Category"
                }

                input
                    id="name"
                    type="text"
                    name="name"
                    placeholder="Category Name"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Category" }
        }
    }
}

#[cfg(test)]
mod category_form_tests {
    use scraper::Html;

    use crate::{
        endpoints,
        test_utils::{assert_form_submit_button, assert_hx_endpoint, must_get_form},
    };

    use super::category_form;

    #[test]
    fn form_posts_to_category_endpoint() {
        let html = Html::parse_fragment(&category_form().into_string());

        let form = must_get_form(&html);
        assert_hx_endpoint(&form, endpoints::POST_CATEGORY, "hx-post");
        assert_form_submit_button(&form);
    }
}
