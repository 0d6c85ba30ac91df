//! Root theme component.
//!
//! Renders the header, classifies the current route against the content
//! store, and switches in exactly one template for the result.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::{Header, HomeView, ListView, LoadingView, PageError, PostView};
use crate::core::{Template, classify, select_template};
use crate::models::Route;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/theme.module.css");

#[component]
pub fn Theme(route: Memo<Route>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let classification = Memo::new(move |_| ctx.source.with(|store| classify(store, &route.get())));
    let template = Memo::new(move |_| select_template(classification.get()));

    // Keep the document title in sync with the displayed content.
    Effect::new(move || {
        let site = ctx.theme.with_value(|theme| theme.title.clone());
        let content_title = ctx.source.with(|store| {
            let route = route.get();
            store
                .route_entry(&route)
                .and_then(|entry| entry.entity_ref())
                .and_then(|entity_ref| store.entity(entity_ref.kind, entity_ref.id))
                .map(|entity| entity.title.rendered.clone())
        });
        match content_title {
            Some(title) if !title.is_empty() => dom::set_title(&format!("{title} | {site}")),
            _ => dom::set_title(&site),
        }
    });

    view! {
        <div class=css::shell>
            <header class=css::head>
                <Header />
            </header>
            <main class=css::main>
                {move || match template.get() {
                    Template::Loading => view! { <LoadingView /> }.into_any(),
                    Template::Home => view! { <HomeView route=route /> }.into_any(),
                    Template::Page | Template::Post => view! { <PostView route=route /> }.into_any(),
                    Template::List => view! { <ListView route=route /> }.into_any(),
                    Template::Error => view! { <PageError route=route /> }.into_any(),
                }}
            </main>
        </div>
    }
}
