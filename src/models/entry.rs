//! Route resolution state.

use super::content::PostKind;

/// Content-type tag attached to a resolved route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentType {
    /// The home route, whether it shows a fixed page or the latest posts.
    Home,
    Page,
    Post,
    Attachment,
    /// A listing route (posts page, category archive).
    Archive,
    /// Resolution failed; kept so stale entries stay inspectable.
    Error,
    Unknown,
}

impl ContentType {
    /// Entity-table key space for entries that reference a single entity.
    ///
    /// Home entries reference the configured homepage, which is stored as
    /// a page. Listings and failed routes reference no single entity.
    pub fn post_kind(self) -> Option<PostKind> {
        match self {
            Self::Home | Self::Page => Some(PostKind::Page),
            Self::Post => Some(PostKind::Post),
            Self::Attachment => Some(PostKind::Attachment),
            Self::Archive | Self::Error | Self::Unknown => None,
        }
    }
}

/// Reference into the entity table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntityRef {
    pub kind: PostKind,
    pub id: u64,
}

/// Resolution metadata for one route.
///
/// Constructed only through [`RouteEntry::fetching`], [`RouteEntry::ready`],
/// [`RouteEntry::ready_listing`] and [`RouteEntry::error`], which keep
/// `is_ready`/`is_fetching` mutually exclusive and never combine `is_error`
/// with `is_ready`.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteEntry {
    pub is_fetching: bool,
    pub is_ready: bool,
    pub is_error: bool,
    pub kind: ContentType,
    /// Reference into the entity table for single-content entries.
    pub id: Option<u64>,
    /// Items of a listing entry; empty for single content.
    pub items: Vec<EntityRef>,
}

impl RouteEntry {
    /// A resolution that has started but not completed.
    pub fn fetching() -> Self {
        Self {
            is_fetching: true,
            is_ready: false,
            is_error: false,
            kind: ContentType::Unknown,
            id: None,
            items: Vec::new(),
        }
    }

    /// A resolved single-content entry.
    pub fn ready(kind: ContentType, id: u64) -> Self {
        Self {
            is_fetching: false,
            is_ready: true,
            is_error: false,
            kind,
            id: Some(id),
            items: Vec::new(),
        }
    }

    /// A resolved listing entry.
    pub fn ready_listing(kind: ContentType, items: Vec<EntityRef>) -> Self {
        Self {
            is_fetching: false,
            is_ready: true,
            is_error: false,
            kind,
            id: None,
            items,
        }
    }

    /// A failed resolution.
    pub fn error() -> Self {
        Self {
            is_fetching: false,
            is_ready: false,
            is_error: true,
            kind: ContentType::Error,
            id: None,
            items: Vec::new(),
        }
    }

    /// Reference to the single entity this entry points at, if any.
    pub fn entity_ref(&self) -> Option<EntityRef> {
        let id = self.id?;
        let kind = self.kind.post_kind()?;
        Some(EntityRef { kind, id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invariants(entry: &RouteEntry) {
        assert!(!(entry.is_ready && entry.is_fetching));
        assert!(!(entry.is_error && entry.is_ready));
    }

    #[test]
    fn test_constructors_uphold_invariants() {
        assert_invariants(&RouteEntry::fetching());
        assert_invariants(&RouteEntry::ready(ContentType::Post, 7));
        assert_invariants(&RouteEntry::ready_listing(ContentType::Archive, Vec::new()));
        assert_invariants(&RouteEntry::error());
    }

    #[test]
    fn test_entity_ref_for_single_content() {
        let entry = RouteEntry::ready(ContentType::Page, 42);
        let entity_ref = entry.entity_ref().unwrap();
        assert_eq!(entity_ref.kind, PostKind::Page);
        assert_eq!(entity_ref.id, 42);

        // Home entries point at the homepage page.
        let home = RouteEntry::ready(ContentType::Home, 9);
        assert_eq!(home.entity_ref().unwrap().kind, PostKind::Page);
    }

    #[test]
    fn test_no_entity_ref_for_listings_and_failures() {
        let listing = RouteEntry::ready_listing(
            ContentType::Archive,
            vec![EntityRef { kind: PostKind::Post, id: 1 }],
        );
        assert_eq!(listing.entity_ref(), None);
        assert_eq!(RouteEntry::error().entity_ref(), None);
        assert_eq!(RouteEntry::fetching().entity_ref(), None);
    }
}
