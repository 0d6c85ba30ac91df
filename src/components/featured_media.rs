//! Featured image rendered from stored media renditions.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::core::resolve_srcset;

stylance::import_crate_style!(css, "src/components/featured_media.module.css");

/// Renders the responsive image for a media id, or nothing while the
/// media is absent from the store. The `srcset` order is whatever the
/// size map yields; the browser picks by width either way.
#[component]
pub fn FeaturedMedia(id: u64) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    move || {
        ctx.source.with(|store| {
            let set = resolve_srcset(store, id)?;
            let alt = store
                .media(id)
                .map(|media| media.title.rendered.clone())
                .unwrap_or_default();
            Some(view! {
                <figure class=css::container>
                    <img
                        class=css::image
                        src=set.primary_url
                        srcset=set.descriptor
                        alt=alt
                        loading="lazy"
                    />
                </figure>
            })
        })
    }
}
