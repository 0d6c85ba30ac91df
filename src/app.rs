//! Root application module.
//!
//! Contains the main App component and the AppContext definition following
//! Leptos conventions.

use leptos::prelude::*;

use crate::components::AppRouter;
use crate::config::ThemeOptions;
use crate::core::{ContentStore, PrefetchMarker};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree; components receive the
/// content store and theme options through this context instead of
/// ambient globals.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos handles, which are
/// cheap to copy (they're just pointers to the underlying state).
#[derive(Clone, Copy)]
pub struct AppContext {
    /// All fetched content, keyed by route and entity id. Components only
    /// read it; the WordPress source is the sole writer.
    pub source: RwSignal<ContentStore>,

    /// Site options from `assets/theme.toml`, read-only.
    pub theme: StoredValue<ThemeOptions>,

    /// At-most-once bookkeeping for the post-render prefetch.
    pub prefetch: StoredValue<PrefetchMarker>,
}

impl AppContext {
    /// Creates the application context with an empty store.
    pub fn new(options: ThemeOptions) -> Self {
        Self {
            source: RwSignal::new(ContentStore::new()),
            theme: StoredValue::new(options),
            prefetch: StoredValue::new(PrefetchMarker::new()),
        }
    }
}

// ============================================================================
// App
// ============================================================================

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(ThemeOptions::load());
    provide_context(ctx);

    view! {
        <ErrorBoundary fallback=|errors| {
            view! {
                <div>
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <ul>
                        {move || {
                            errors
                                .get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </div>
            }
        }>
            <AppRouter />
        </ErrorBoundary>
    }
}
