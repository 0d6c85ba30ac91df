//! Post-render prefetch bookkeeping.
//!
//! After a single-content view first renders with data, the theme fetches
//! the home route in the background and warms the archive template, so a
//! likely next navigation lands instantly. [`PrefetchMarker`] is the
//! at-most-once bookkeeping for that effect; the side effects themselves
//! are wired in the single-content component.

use crate::models::Route;

/// Tracks which route transition has already triggered the post-render
/// prefetch, so the effect fires once per transition instead of on every
/// re-render.
#[derive(Clone, Debug, Default)]
pub struct PrefetchMarker {
    last: Option<Route>,
}

impl PrefetchMarker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a prefetch for `route`.
    ///
    /// Returns `true` the first time a transition to `route` is marked and
    /// `false` on re-renders of the same route. Navigating to a different
    /// route re-arms the marker.
    pub fn mark(&mut self, route: &Route) -> bool {
        if self.last.as_ref() == Some(route) {
            return false;
        }
        self.last = Some(route.clone());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_per_transition() {
        let mut marker = PrefetchMarker::new();
        let about = Route::new("/about/");

        assert!(marker.mark(&about));
        assert!(!marker.mark(&about), "re-render must not refire");
        assert!(!marker.mark(&about));
    }

    #[test]
    fn test_navigation_rearms() {
        let mut marker = PrefetchMarker::new();
        let about = Route::new("/about/");
        let post = Route::new("/blog/post-1/");

        assert!(marker.mark(&about));
        assert!(marker.mark(&post));
        assert!(!marker.mark(&post));
        // Returning to an earlier route is a fresh transition.
        assert!(marker.mark(&about));
    }
}
