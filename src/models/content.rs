//! Content entities as served by the WordPress REST API.

use serde::{Deserialize, Deserializer, Serialize};

/// A field wrapped in the API's `{ "rendered": ... }` envelope.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Rendered {
    #[serde(default)]
    pub rendered: String,
}

#[cfg(test)]
impl Rendered {
    pub(crate) fn new(html: impl Into<String>) -> Self {
        Self { rendered: html.into() }
    }
}

/// Post-type discriminator for fetched content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    #[default]
    Post,
    Page,
    Attachment,
}

impl PostKind {
    /// REST collection this kind is served from.
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Post => "posts",
            Self::Page => "pages",
            Self::Attachment => "media",
        }
    }
}

/// A fetched content item (post, page or attachment).
///
/// Created on the first successful fetch of its id and immutable
/// afterwards; the session cache never evicts.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ContentEntity {
    pub id: u64,
    #[serde(rename = "type", default)]
    pub kind: PostKind,
    /// Publish date as served (`2026-01-05T12:34:56`).
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub slug: String,
    pub title: Rendered,
    /// Rendered body markup.
    #[serde(default)]
    pub content: Rendered,
    #[serde(default)]
    pub excerpt: Rendered,
    /// Attachment description markup; carries its own thumbnail.
    #[serde(default)]
    pub description: Rendered,
    /// The API encodes "no featured image" as media id 0.
    #[serde(default, deserialize_with = "zero_as_none")]
    pub featured_media: Option<u64>,
}

fn zero_as_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    let id = Option::<u64>::deserialize(deserializer)?;
    Ok(id.filter(|&id| id != 0))
}

#[cfg(test)]
impl ContentEntity {
    /// Minimal entity for store and classifier tests.
    pub(crate) fn fixture(kind: PostKind, id: u64, slug: &str) -> Self {
        Self {
            id,
            kind,
            date: "2026-01-05T12:34:56".to_string(),
            slug: slug.to_string(),
            title: Rendered::new(slug.to_uppercase()),
            content: Rendered::new("<p>body</p>"),
            excerpt: Rendered::default(),
            description: Rendered::default(),
            featured_media: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_post_payload() {
        let entity: ContentEntity = serde_json::from_str(
            r#"{
                "id": 7,
                "type": "post",
                "date": "2026-01-05T12:34:56",
                "slug": "hello-world",
                "title": { "rendered": "Hello World" },
                "content": { "rendered": "<p>Hi.</p>" },
                "excerpt": { "rendered": "<p>Hi…</p>" },
                "featured_media": 21
            }"#,
        )
        .unwrap();
        assert_eq!(entity.kind, PostKind::Post);
        assert_eq!(entity.title.rendered, "Hello World");
        assert_eq!(entity.featured_media, Some(21));
    }

    #[test]
    fn test_zero_featured_media_is_none() {
        let entity: ContentEntity = serde_json::from_str(
            r#"{ "id": 3, "title": { "rendered": "t" }, "featured_media": 0 }"#,
        )
        .unwrap();
        assert_eq!(entity.featured_media, None);
    }

    #[test]
    fn test_missing_fields_default() {
        let entity: ContentEntity =
            serde_json::from_str(r#"{ "id": 3, "title": { "rendered": "t" } }"#).unwrap();
        assert_eq!(entity.kind, PostKind::Post);
        assert_eq!(entity.featured_media, None);
        assert!(entity.content.rendered.is_empty());
    }

    #[test]
    fn test_cache_round_trip_preserves_featured_media() {
        let entity: ContentEntity = serde_json::from_str(
            r#"{ "id": 3, "type": "page", "title": { "rendered": "t" }, "featured_media": 0 }"#,
        )
        .unwrap();
        let json = serde_json::to_string(&entity).unwrap();
        let back: ContentEntity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entity);
        assert_eq!(back.kind, PostKind::Page);
    }
}
