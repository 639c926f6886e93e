//! The sort and filter controls and the CSV export link.

use maud::{Markup, html};

use crate::{
    endpoints,
    html::{FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, LINK_STYLE},
    view::{SortKey, ViewState},
};

/// Renders the sort and filter dropdowns.
///
/// Each control submits the form on change, reloading the page with the new
/// view in the query string. The view itself is never stored server-side.
pub(super) fn view_controls(categories: &[String], view: &ViewState) -> Markup {
    let sort_options = [
        (SortKey::None, "None"),
        (SortKey::Amount, "Amount"),
        (SortKey::Date, "Date"),
        (SortKey::Category, "Category"),
    ];

    let current_filter = view.category_filter().unwrap_or("");

    html!(
        form
            method="get"
            action=(endpoints::ROOT)
            class="w-full flex flex-col sm:flex-row gap-4"
        {
            div class="flex-1"
            {
                label
                    for="sort"
                    class=(FORM_LABEL_STYLE)
                {
                    "Sort by"
                }

                select
                    name="sort"
                    id="sort"
                    onchange="this.form.submit()"
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for (key, label) in sort_options {
                        @if key == view.sort {
                            option value=(key.as_str()) selected { (label) }
                        } @else {
                            option value=(key.as_str()) { (label) }
                        }
                    }
                }
            }

            div class="flex-1"
            {
                label
                    for="filter"
                    class=(FORM_LABEL_STYLE)
                {
                    "Filter by category"
                }

                select
                    name="filter"
                    id="filter"
                    onchange="this.form.submit()"
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    @if current_filter.is_empty() {
                        option value="" selected { "All" }
                    } @else {
                        option value="" { "All" }
                    }

                    @for category in categories {
                        @if category == current_filter {
                            option value=(category) selected { (category) }
                        } @else {
                            option value=(category) { (category) }
                        }
                    }
                }
            }
        }
    )
}

/// Renders a download link for the CSV export of the current view.
pub(super) fn export_link(view: &ViewState) -> Markup {
    html!(
        a
            href=(export_url(view))
            download="expenses.csv"
            class=(LINK_STYLE)
        {
            "Export CSV"
        }
    )
}

/// Build the export URL, carrying the current sort and filter so the file
/// matches what the table shows.
fn export_url(view: &ViewState) -> String {
    let mut pairs: Vec<(&str, &str)> = vec![("sort", view.sort.as_str())];

    if let Some(filter) = view.category_filter() {
        pairs.push(("filter", filter));
    }

    match serde_urlencoded::to_string(&pairs) {
        Ok(query) if !query.is_empty() => format!("{}?{query}", endpoints::EXPORT_CSV),
        _ => endpoints::EXPORT_CSV.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::view::{SortKey, ViewState};

    use super::{export_url, view_controls};

    #[test]
    fn sort_select_marks_current_key_selected() {
        let view = ViewState {
            sort: SortKey::Amount,
            filter: None,
        };

        let html = Html::parse_fragment(
            &view_controls(&["Food".to_owned()], &view).into_string(),
        );

        let selector = Selector::parse("select[name=sort] option[selected]").unwrap();
        let selected = html.select(&selector).next().expect("No selected option");
        assert_eq!(selected.value().attr("value"), Some("amount"));
    }

    #[test]
    fn filter_select_lists_all_option_plus_categories() {
        let view = ViewState {
            sort: SortKey::None,
            filter: Some("Food".to_owned()),
        };
        let categories = vec!["Food".to_owned(), "Travel".to_owned()];

        let html = Html::parse_fragment(&view_controls(&categories, &view).into_string());

        let selector = Selector::parse("select[name=filter] option").unwrap();
        let options: Vec<_> = html
            .select(&selector)
            .map(|option| {
                (
                    option.value().attr("value").unwrap().to_owned(),
                    option.value().attr("selected").is_some(),
                )
            })
            .collect();
        assert_eq!(
            options,
            vec![
                ("".to_owned(), false),
                ("Food".to_owned(), true),
                ("Travel".to_owned(), false),
            ]
        );
    }

    #[test]
    fn export_url_carries_sort_and_filter() {
        let view = ViewState {
            sort: SortKey::Date,
            filter: Some("Food & Drink".to_owned()),
        };

        assert_eq!(
            export_url(&view),
            "/expenses.csv?sort=date&filter=Food+%26+Drink"
        );
    }

    #[test]
    fn export_url_omits_empty_filter() {
        let view = ViewState {
            sort: SortKey::None,
            filter: Some(String::new()),
        };

        assert_eq!(export_url(&view), "/expenses.csv?sort=none");
    }
}
