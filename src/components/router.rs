//! Application router component.
//!
//! The URL hash is the source of truth: `#/about/` is the route
//! `/about/`. Native hashchange events keep the route signal current, so
//! browser back/forward buttons work without a router dependency, and the
//! site runs from any static host.

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::Theme;
use crate::core::source;
use crate::models::Route;

/// Main application router.
///
/// Tracks the URL hash in a route signal and starts content resolution on
/// every route change; the store suppresses repeats, so re-entering a
/// resolved route costs nothing.
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Create route signal from current URL hash
    let route = RwSignal::new(Route::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(Route::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    // Every route change triggers resolution. The fetch is deduplicated
    // and never cancelled; a result for a left-behind route stays cached.
    Effect::new(move || {
        let current = route.get();
        spawn_local(source::fetch(ctx, current));
    });

    let route_memo = Memo::new(move |_| route.get());

    view! { <Theme route=route_memo /> }
}
