//! Home template.
//!
//! Shows the configured homepage page when one resolved, or the
//! latest-posts feed otherwise. A home entry that references a missing
//! entity fails loudly, same as the single views.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::{PageError, list, post};
use crate::models::{ContentEntity, EntityRef, Route};

stylance::import_crate_style!(css, "src/components/home.module.css");

#[derive(Clone, PartialEq)]
enum HomeContent {
    Single(ContentEntity),
    Feed(Vec<EntityRef>),
}

#[component]
pub fn HomeView(route: Memo<Route>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let content = Memo::new(move |_| {
        ctx.source.with(|store| {
            let entry = store.route_entry(&route.get())?;
            if !entry.is_ready {
                return None;
            }
            match entry.entity_ref() {
                Some(entity_ref) => store
                    .entity(entity_ref.kind, entity_ref.id)
                    .cloned()
                    .map(HomeContent::Single),
                None => Some(HomeContent::Feed(entry.items.clone())),
            }
        })
    });

    move || match content.get() {
        Some(HomeContent::Single(entity)) => post::single_content(ctx, entity, true).into_any(),
        Some(HomeContent::Feed(items)) => {
            view! { <section class=css::feed>{list::item_cards(ctx, items)}</section> }.into_any()
        }
        None => view! { <PageError route=route /> }.into_any(),
    }
}
