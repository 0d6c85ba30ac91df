//! Archive template: a listing of content references.
//!
//! Reads the same store entries as the single views and shares the
//! featured-image path with them; `item_cards` is also what the home feed
//! renders.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::FeaturedMedia;
use crate::models::{EntityRef, Route};
use crate::utils::{format, markup};

stylance::import_crate_style!(css, "src/components/list.module.css");

#[component]
pub fn ListView(route: Memo<Route>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let items = Memo::new(move |_| {
        ctx.source.with(|store| {
            store
                .route_entry(&route.get())
                .filter(|entry| entry.is_ready)
                .map(|entry| entry.items.clone())
                .unwrap_or_default()
        })
    });

    view! { <section class=css::list>{move || item_cards(ctx, items.get())}</section> }
}

/// Cards for a list of entity references.
pub(super) fn item_cards(ctx: AppContext, items: Vec<EntityRef>) -> impl IntoView {
    let show_featured = ctx.theme.with_value(|theme| theme.featured.show_on_list);

    items
        .into_iter()
        .filter_map(|item| ctx.source.with(|store| store.entity(item.kind, item.id).cloned()))
        .map(|entity| {
            let featured_img = entity.featured_media.filter(|_| show_featured);
            let date = format::display_date(&entity.date);
            let excerpt = markup::transform_excerpt(&entity.excerpt.rendered);
            let href = Route::new(&entity.slug).to_hash();
            let title = entity.title.rendered;

            view! {
                <article class=css::item>
                    {featured_img.map(|id| view! { <FeaturedMedia id=id /> })}
                    <h2 class=css::itemTitle>
                        <a href=href inner_html=title />
                    </h2>
                    <p class=css::itemMeta>{date}</p>
                    <div class=css::itemExcerpt inner_html=excerpt />
                </article>
            }
        })
        .collect::<Vec<_>>()
}

/// Warm the template's lazily-initialized machinery (the sanitizers) so
/// the first archive render doesn't pay the setup cost.
pub fn preload() {
    markup::preload();
}
