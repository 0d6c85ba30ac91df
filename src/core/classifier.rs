//! Route classification.
//!
//! A synchronous, pure read over the content store: no fetching, no
//! suspension. The resulting [`Classification`] is the single
//! type-discrimination point for the whole view layer.

use crate::core::store::ContentStore;
use crate::models::{ContentType, Route};

/// Mutually exclusive content classification for a route.
///
/// Exactly one value holds per route at any instant. There is no combined
/// "any single content" flag; callers that need one match
/// `Page | Post | Attachment` explicitly (see [`Classification::is_single`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    /// No entry yet, or a fetch is in flight.
    Loading,
    Home,
    Page,
    Post,
    Archive,
    Attachment,
    /// Resolution failed.
    Error,
    /// Entry is ready but carries a type the theme cannot place.
    Unknown,
}

impl Classification {
    /// All classification values, for exhaustiveness checks in tests.
    #[cfg(test)]
    pub(crate) const ALL: [Classification; 8] = [
        Self::Loading,
        Self::Home,
        Self::Page,
        Self::Post,
        Self::Archive,
        Self::Attachment,
        Self::Error,
        Self::Unknown,
    ];

    /// True for the single-content classifications (page, post,
    /// attachment). Pages are post-types too but still classify as
    /// `Page` only.
    pub fn is_single(self) -> bool {
        matches!(self, Self::Page | Self::Post | Self::Attachment)
    }
}

/// Classify a route against the store's current state.
///
/// Idempotent: repeated calls without an intervening store mutation return
/// the same value.
pub fn classify(store: &ContentStore, route: &Route) -> Classification {
    let Some(entry) = store.route_entry(route) else {
        return Classification::Loading;
    };
    if entry.is_fetching {
        return Classification::Loading;
    }
    if entry.is_error {
        return Classification::Error;
    }
    if !entry.is_ready {
        return Classification::Loading;
    }
    match entry.kind {
        ContentType::Home => Classification::Home,
        ContentType::Page => Classification::Page,
        ContentType::Post => Classification::Post,
        ContentType::Attachment => Classification::Attachment,
        ContentType::Archive => Classification::Archive,
        ContentType::Error | ContentType::Unknown => Classification::Unknown,
    }
}
