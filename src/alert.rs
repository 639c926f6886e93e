//! Alert messages swapped into the page's alert container by htmx.

use maud::{Markup, html};

/// Render an error alert with an optional details line.
pub fn alert_error(message: &str, details: &str) -> Markup {
    html! {
        div
            id="alert-container"
            hx-swap-oob="true"
            class="w-full max-w-md px-4"
            style="position: fixed; bottom: 1rem; left: 50%; transform: translateX(-50%); z-index: 9999;"
        {
            div
                class="flex flex-col gap-1 p-4 rounded-lg border text-red-800
                    bg-red-50 border-red-300 dark:bg-gray-800 dark:text-red-400
                    dark:border-red-800"
                role="alert"
            {
                p class="font-medium" { (message) }

                @if !details.is_empty() {
                    p class="text-sm" { (details) }
                }
            }
        }
    }
}
