//! Session content store.
//!
//! Holds every fetched route entry, content entity and media item for the
//! lifetime of the session. Components only read; the WordPress source
//! ([`crate::core::source`]) is the sole writer. All mutation happens
//! between discrete events on the single wasm thread, so no locking is
//! involved.

use std::collections::HashMap;

use crate::models::{
    ContentEntity, ContentType, EntityRef, MediaEntity, PostKind, Route, RouteEntry,
};

/// Process-wide cache of fetched content, keyed by route and by
/// `(kind, id)`. Initialized empty at startup; entries are never evicted.
#[derive(Clone, Debug, Default)]
pub struct ContentStore {
    routes: HashMap<Route, RouteEntry>,
    entities: HashMap<(PostKind, u64), ContentEntity>,
    media: HashMap<u64, MediaEntity>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolution state for a route, if resolution has begun.
    pub fn route_entry(&self, route: &Route) -> Option<&RouteEntry> {
        self.routes.get(route)
    }

    pub fn entity(&self, kind: PostKind, id: u64) -> Option<&ContentEntity> {
        self.entities.get(&(kind, id))
    }

    pub fn media(&self, id: u64) -> Option<&MediaEntity> {
        self.media.get(&id)
    }

    // ------------------------------------------------------------------
    // Writer API. Only the fetch source calls these.
    // ------------------------------------------------------------------

    /// Mark a route as fetching.
    ///
    /// Returns `false` when a fetch is already in flight or the route has
    /// already resolved; the caller must not fetch again. Error entries
    /// may be refetched explicitly.
    pub fn begin_fetch(&mut self, route: &Route) -> bool {
        match self.routes.get(route) {
            Some(entry) if entry.is_fetching || entry.is_ready => false,
            _ => {
                self.routes.insert(route.clone(), RouteEntry::fetching());
                true
            }
        }
    }

    /// Store a single entity and mark its route ready.
    ///
    /// The entity lands in the table before the entry flips to ready, so a
    /// reader that observes readiness always finds the entity populated.
    pub fn insert_single(&mut self, route: &Route, kind: ContentType, entity: ContentEntity) {
        let id = entity.id;
        self.entities.insert((entity.kind, id), entity);
        self.routes.insert(route.clone(), RouteEntry::ready(kind, id));
    }

    /// Store a listing's entities and mark its route ready.
    pub fn insert_listing(
        &mut self,
        route: &Route,
        kind: ContentType,
        entities: Vec<ContentEntity>,
    ) {
        let items: Vec<EntityRef> = entities
            .iter()
            .map(|entity| EntityRef { kind: entity.kind, id: entity.id })
            .collect();
        for entity in entities {
            self.entities.insert((entity.kind, entity.id), entity);
        }
        self.routes
            .insert(route.clone(), RouteEntry::ready_listing(kind, items));
    }

    pub fn insert_media(&mut self, media: MediaEntity) {
        self.media.insert(media.id, media);
    }

    /// Record a failed resolution.
    pub fn mark_error(&mut self, route: &Route) {
        self.routes.insert(route.clone(), RouteEntry::error());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u64, slug: &str) -> ContentEntity {
        ContentEntity::fixture(PostKind::Post, id, slug)
    }

    #[test]
    fn test_begin_fetch_dedups_in_flight_and_ready() {
        let mut store = ContentStore::new();
        let route = Route::new("/blog/post-1/");

        assert!(store.begin_fetch(&route));
        assert!(!store.begin_fetch(&route), "in-flight fetch must be suppressed");

        store.insert_single(&route, ContentType::Post, post(1, "post-1"));
        assert!(!store.begin_fetch(&route), "resolved route must not refetch");
    }

    #[test]
    fn test_begin_fetch_allows_retry_after_error() {
        let mut store = ContentStore::new();
        let route = Route::new("/missing/");

        assert!(store.begin_fetch(&route));
        store.mark_error(&route);
        assert!(store.begin_fetch(&route));
    }

    #[test]
    fn test_ready_implies_entity_present() {
        let mut store = ContentStore::new();
        let route = Route::new("/blog/post-1/");
        store.begin_fetch(&route);
        store.insert_single(&route, ContentType::Post, post(1, "post-1"));

        let entry = store.route_entry(&route).unwrap();
        assert!(entry.is_ready);
        assert!(!entry.is_fetching);
        let entity_ref = entry.entity_ref().unwrap();
        assert!(store.entity(entity_ref.kind, entity_ref.id).is_some());
    }

    #[test]
    fn test_listing_preserves_item_order() {
        let mut store = ContentStore::new();
        let route = Route::new("/blog/");
        store.begin_fetch(&route);
        store.insert_listing(
            &route,
            ContentType::Archive,
            vec![post(3, "c"), post(1, "a"), post(2, "b")],
        );

        let entry = store.route_entry(&route).unwrap();
        let ids: Vec<u64> = entry.items.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        for item in &entry.items {
            assert!(store.entity(item.kind, item.id).is_some());
        }
    }

    #[test]
    fn test_entities_shared_across_routes() {
        let mut store = ContentStore::new();
        let listing = Route::new("/blog/");
        let single = Route::new("/blog/post-1/");
        store.insert_listing(&listing, ContentType::Archive, vec![post(1, "post-1")]);
        store.insert_single(&single, ContentType::Post, post(1, "post-1"));

        assert!(store.route_entry(&listing).unwrap().is_ready);
        assert!(store.route_entry(&single).unwrap().is_ready);
        assert!(store.entity(PostKind::Post, 1).is_some());
    }
}
