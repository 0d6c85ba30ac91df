//! Single-content view for pages, posts and attachments.
//!
//! Only rendered once classification reports a single-content route, which
//! guarantees the entity was stored before readiness flipped. An entity
//! missing despite that is a store-population bug and renders the error
//! template rather than a blank page.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::{FeaturedMedia, PageError, list};
use crate::core::source;
use crate::models::{ContentEntity, PostKind, Route};
use crate::utils::{format, markup};

stylance::import_crate_style!(css, "src/components/post.module.css");

#[component]
pub fn PostView(route: Memo<Route>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let entity = Memo::new(move |_| {
        ctx.source.with(|store| {
            let route = route.get();
            let entry = store.route_entry(&route)?;
            if !entry.is_ready {
                return None;
            }
            let entity_ref = entry.entity_ref()?;
            store.entity(entity_ref.kind, entity_ref.id).cloned()
        })
    });

    // Once the content is on screen, prefetch the home route and warm the
    // archive template so a likely next navigation loads instantly. Runs
    // once per route transition, not on every re-render; both effects are
    // fire-and-forget and the store/session cache dedup the fetch.
    Effect::new(move || {
        let current = route.get();
        let rendered = entity.with(|entity| entity.is_some());
        if rendered
            && ctx
                .prefetch
                .try_update_value(|marker| marker.mark(&current))
                .unwrap_or(false)
        {
            spawn_local(source::fetch(ctx, Route::home()));
            list::preload();
        }
    });

    move || match entity.get() {
        Some(entity) => single_content(ctx, entity, false).into_any(),
        None => view! { <PageError route=route /> }.into_any(),
    }
}

/// Shared rendering for any single content item; the home template reuses
/// it for the configured homepage.
///
/// `home` suppresses the featured block regardless of theme options.
pub(super) fn single_content(ctx: AppContext, entity: ContentEntity, home: bool) -> impl IntoView {
    let show_featured = ctx.theme.with_value(|theme| theme.featured.show_on_post) && !home;
    let featured_img = entity.featured_media.filter(|_| show_featured);

    // Pages are not authored content in the display model: no date block.
    let is_page = entity.kind == PostKind::Page;
    let date = format::display_date(&entity.date);

    let body = if entity.kind == PostKind::Attachment {
        // Attachment descriptions already carry their own thumbnail.
        markup::transform_content(&entity.description.rendered)
    } else {
        markup::transform_content(&entity.content.rendered)
    };
    let title = entity.title.rendered;

    view! {
        <article class=css::container>
            {featured_img.map(|id| view! { <FeaturedMedia id=id /> })}
            <h1 class=css::title inner_html=title />
            {(!is_page && !home).then(|| view! { <p class=css::meta>"on " <b>{date}</b></p> })}
            <div class=css::content inner_html=body />
        </article>
    }
}
