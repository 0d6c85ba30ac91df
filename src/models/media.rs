//! Media entities and their stored renditions.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::content::Rendered;

/// A fetched media item.
///
/// `media_details.sizes` maps rendition labels ("thumbnail", "medium",
/// "full", ...) to concrete files; `source_url` is the canonical original.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct MediaEntity {
    pub id: u64,
    #[serde(default)]
    pub title: Rendered,
    pub source_url: String,
    #[serde(default)]
    pub media_details: MediaDetails,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct MediaDetails {
    #[serde(default)]
    pub sizes: HashMap<String, SizeVariant>,
}

/// One stored rendition of a media item.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SizeVariant {
    pub source_url: String,
    pub width: u32,
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_media_payload() {
        let media: MediaEntity = serde_json::from_str(
            r#"{
                "id": 21,
                "title": { "rendered": "Sunrise" },
                "source_url": "https://cdn.example/sunrise.jpg",
                "media_details": {
                    "sizes": {
                        "thumbnail": {
                            "source_url": "https://cdn.example/sunrise-150.jpg",
                            "width": 150,
                            "height": 150
                        }
                    }
                }
            }"#,
        )
        .unwrap();
        assert_eq!(media.media_details.sizes.len(), 1);
        assert_eq!(media.media_details.sizes["thumbnail"].width, 150);
    }

    #[test]
    fn test_missing_details_default_to_empty() {
        let media: MediaEntity = serde_json::from_str(
            r#"{ "id": 21, "source_url": "https://cdn.example/a.jpg" }"#,
        )
        .unwrap();
        assert!(media.media_details.sizes.is_empty());
    }
}
