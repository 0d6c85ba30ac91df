//! Responsive image descriptors.

use crate::core::store::ContentStore;

/// A resolved responsive image: the canonical URL plus an optional width
/// descriptor for `srcset`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SrcSet {
    pub primary_url: String,
    /// `"<url> <width>w"` entries joined with `", "`. `None` when the
    /// media has no stored renditions.
    pub descriptor: Option<String>,
}

/// Build a `srcset` descriptor from a media item's stored renditions.
///
/// Returns `None` when the media is not in the store (not yet fetched, or
/// the content has no featured image); callers render nothing in that
/// case. Entries are listed in map iteration order, which is not
/// width-sorted; browsers pick by width regardless of listed order.
pub fn resolve_srcset(store: &ContentStore, media_id: u64) -> Option<SrcSet> {
    let media = store.media(media_id)?;
    let sizes = &media.media_details.sizes;
    let descriptor = (!sizes.is_empty()).then(|| {
        sizes
            .values()
            .map(|size| format!("{} {}w", size.source_url, size.width))
            .collect::<Vec<_>>()
            .join(", ")
    });
    Some(SrcSet {
        primary_url: media.source_url.clone(),
        descriptor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MediaDetails, MediaEntity, Rendered, SizeVariant};

    fn media(id: u64, sizes: &[(&str, &str, u32)]) -> MediaEntity {
        MediaEntity {
            id,
            title: Rendered::new("Sunrise"),
            source_url: "https://cdn.example/sunrise.jpg".to_string(),
            media_details: MediaDetails {
                sizes: sizes
                    .iter()
                    .map(|(label, url, width)| {
                        (
                            label.to_string(),
                            SizeVariant {
                                source_url: url.to_string(),
                                width: *width,
                                height: *width,
                            },
                        )
                    })
                    .collect(),
            },
        }
    }

    #[test]
    fn test_absent_media_is_none_not_an_error() {
        let store = ContentStore::new();
        assert_eq!(resolve_srcset(&store, 999), None);
    }

    #[test]
    fn test_descriptor_lists_every_rendition() {
        let mut store = ContentStore::new();
        store.insert_media(media(
            21,
            &[
                ("thumbnail", "https://cdn.example/sunrise-150.jpg", 150),
                ("large", "https://cdn.example/sunrise-1024.jpg", 1024),
            ],
        ));

        let set = resolve_srcset(&store, 21).unwrap();
        assert_eq!(set.primary_url, "https://cdn.example/sunrise.jpg");
        let descriptor = set.descriptor.unwrap();
        assert!(descriptor.contains("https://cdn.example/sunrise-150.jpg 150w"));
        assert!(descriptor.contains("https://cdn.example/sunrise-1024.jpg 1024w"));
        assert!(descriptor.contains(", "));
    }

    #[test]
    fn test_empty_sizes_keep_primary_url() {
        let mut store = ContentStore::new();
        store.insert_media(media(21, &[]));

        let set = resolve_srcset(&store, 21).unwrap();
        assert_eq!(set.descriptor, None);
        assert_eq!(set.primary_url, "https://cdn.example/sunrise.jpg");
    }
}
