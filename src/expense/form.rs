//! The add-expense form.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
};

/// Values to pre-fill the form with, used to keep the user's input when the
/// form is re-rendered with an error message.
#[derive(Debug, Default)]
pub struct ExpenseFormDefaults<'a> {
    /// The previously submitted amount text.
    pub amount: Option<&'a str>,
    /// The previously selected category.
    pub category: Option<&'a str>,
    /// The previously submitted date.
    pub date: Option<&'a str>,
    /// The previously submitted description.
    pub description: Option<&'a str>,
}

/// Render the add-expense form.
///
/// None of the inputs carry client-side validation beyond the input types:
/// the server accepts whatever arrives, except that a non-numeric amount
/// re-renders the form with `error_message`.
pub fn expense_form(
    categories: &[String],
    defaults: &ExpenseFormDefaults<'_>,
    error_message: &str,
) -> Markup {
    html! {
        form
            hx-post=(endpoints::POST_EXPENSE)
            hx-target-error="#alert-container"
            class="w-full space-y-4"
        {
            div
            {
                label
                    for="amount"
                    class=(FORM_LABEL_STYLE)
                {
                    "Amount"
                }

                input
                    name="amount"
                    id="amount"
                    type="number"
                    step="0.01"
                    placeholder="0.00"
                    value=[defaults.amount]
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label
                    for="category"
                    class=(FORM_LABEL_STYLE)
                {
                    "Category"
                }

                select
                    name="category"
                    id="category"
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" { "Select a category" }

                    @for category in categories {
                        @if Some(category.as_str()) == defaults.category {
                            option value=(category) selected { (category) }
                        } @else {
                            option value=(category) { (category) }
                        }
                    }
                }
            }

            div
            {
                label
                    for="date"
                    class=(FORM_LABEL_STYLE)
                {
                    "Date"
                }

                input
                    name="date"
                    id="date"
                    type="date"
                    value=[defaults.date]
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label
                    for="description"
                    class=(FORM_LABEL_STYLE)
                {
                    "Description"
                }

                input
                    name="description"
                    id="description"
                    type="text"
                    placeholder="Description"
                    value=[defaults.description]
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            @if !error_message.is_empty() {
                p class="text-red-600 dark:text-red-400"
                {
                    (error_message)
                }
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Expense" }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::{
        endpoints,
        test_utils::{assert_form_input, assert_form_submit_button, assert_hx_endpoint, must_get_form},
    };

    use super::{ExpenseFormDefaults, expense_form};

    fn render(categories: &[String], defaults: &ExpenseFormDefaults<'_>, error: &str) -> Html {
        Html::parse_fragment(&expense_form(categories, defaults, error).into_string())
    }

    #[test]
    fn form_posts_to_expense_endpoint_with_all_fields() {
        let categories = vec!["Food".to_owned(), "Travel".to_owned()];

        let html = render(&categories, &ExpenseFormDefaults::default(), "");

        let form = must_get_form(&html);
        assert_hx_endpoint(&form, endpoints::POST_EXPENSE, "hx-post");
        assert_form_input(&form, "amount", "number");
        assert_form_input(&form, "date", "date");
        assert_form_input(&form, "description", "text");
        assert_form_submit_button(&form);
    }

    #[test]
    fn category_select_lists_all_categories_plus_blank() {
        let categories = vec!["Food".to_owned(), "Travel".to_owned()];

        let html = render(&categories, &ExpenseFormDefaults::default(), "");

        let selector = Selector::parse("select[name=category] option").unwrap();
        let options: Vec<String> = html
            .select(&selector)
            .map(|option| option.text().collect())
            .collect();
        assert_eq!(options, vec!["Select a category", "Food", "Travel"]);
    }

    #[test]
    fn defaults_prefill_submitted_values() {
        let categories = vec!["Food".to_owned()];
        let defaults = ExpenseFormDefaults {
            amount: Some("abc"),
            category: Some("Food"),
            date: Some("2024-08-01"),
            description: Some("Lunch"),
        };

        let html = render(&categories, &defaults, "Error: not a number");

        let amount = Selector::parse("input[name=amount]").unwrap();
        let input = html.select(&amount).next().expect("No amount input");
        assert_eq!(input.value().attr("value"), Some("abc"));

        let selected = Selector::parse("option[selected]").unwrap();
        let option = html.select(&selected).next().expect("No selected option");
        assert_eq!(option.value().attr("value"), Some("Food"));
    }
}
