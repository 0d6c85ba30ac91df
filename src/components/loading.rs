//! Loading indicator shown while a route resolves.

use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/loading.module.css");

#[component]
pub fn LoadingView() -> impl IntoView {
    view! {
        <div class=css::loading>
            <span>"Loading..."</span>
        </div>
    }
}
