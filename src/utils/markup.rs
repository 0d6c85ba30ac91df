//! Markup transformation for remotely rendered content.
//!
//! The API delivers pre-rendered HTML; everything that reaches the DOM
//! goes through ammonia first. Two policies: full bodies keep figures and
//! responsive image attributes, excerpts are reduced to inline text.

use std::collections::HashSet;
use std::sync::LazyLock;

use ammonia::Builder;

static CONTENT_SANITIZER: LazyLock<Builder<'static>> = LazyLock::new(|| {
    let mut builder = Builder::default();
    builder.add_tags(["figure", "figcaption"]);
    builder.add_tag_attributes("img", ["srcset", "sizes", "loading", "decoding"]);
    builder
});

static EXCERPT_SANITIZER: LazyLock<Builder<'static>> = LazyLock::new(|| {
    let mut builder = Builder::default();
    builder.tags(HashSet::from(["a", "b", "code", "em", "i", "p", "strong"]));
    builder
});

/// Transform rendered body markup into DOM-safe HTML.
pub fn transform_content(html: &str) -> String {
    CONTENT_SANITIZER.clean(html).to_string()
}

/// Transform an excerpt for list cards: inline markup only.
pub fn transform_excerpt(html: &str) -> String {
    EXCERPT_SANITIZER.clean(html).to_string()
}

/// Force sanitizer initialization ahead of first use.
pub fn preload() {
    LazyLock::force(&CONTENT_SANITIZER);
    LazyLock::force(&EXCERPT_SANITIZER);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_strips_scripts() {
        let clean = transform_content("<p>hi</p><script>alert(1)</script>");
        assert_eq!(clean, "<p>hi</p>");
    }

    #[test]
    fn test_content_keeps_responsive_images() {
        let clean = transform_content(
            r#"<figure><img src="a.jpg" srcset="a-150.jpg 150w" loading="lazy"></figure>"#,
        );
        assert!(clean.contains("<figure>"));
        assert!(clean.contains("srcset"));
    }

    #[test]
    fn test_excerpt_reduces_to_inline_markup() {
        let clean = transform_excerpt(r#"<p>Intro <strong>text</strong> <img src="a.jpg"></p>"#);
        assert!(clean.contains("<strong>text</strong>"));
        assert!(!clean.contains("<img"));
    }
}
