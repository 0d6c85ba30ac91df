//! Error template for failed or unplaceable routes.

use leptos::prelude::*;

use crate::models::Route;

stylance::import_crate_style!(css, "src/components/page_error.module.css");

/// Rendered for every `Error` and `Unknown` classification; a route that
/// exists but failed to resolve never shows an empty page.
#[component]
pub fn PageError(route: Memo<Route>) -> impl IntoView {
    view! {
        <div class=css::error>
            <h1 class=css::title>"Oops! Something went wrong"</h1>
            <p class=css::detail>
                {move || format!("We can't seem to find the content for {}.", route.get())}
            </p>
            <p>
                <a href="#/">"Back to the home page"</a>
            </p>
        </div>
    }
}
