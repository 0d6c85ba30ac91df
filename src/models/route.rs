//! Hash-based routing over normalized content paths.

use std::fmt;

/// A normalized content path: always absolute, always slash-terminated
/// (`/`, `/about/`, `/blog/post-1/`).
///
/// The unit of navigation, and the key of the route index in the content
/// store. Navigation itself is hash-based (`#/about/`), so the site works
/// from any static host without server-side rewrites.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Route(String);

impl Route {
    /// Normalize an arbitrary path or URL hash into a route.
    ///
    /// Accepts `about`, `/about`, `about/`, `#/about/` and friends; all of
    /// them normalize to `/about/`.
    pub fn new(path: &str) -> Self {
        let trimmed = path.trim_start_matches('#').trim_matches('/');
        if trimmed.is_empty() {
            return Self::home();
        }
        Self(format!("/{}/", trimmed))
    }

    /// The home route (`/`).
    pub fn home() -> Self {
        Self("/".to_string())
    }

    /// The normalized path string.
    pub fn path(&self) -> &str {
        &self.0
    }

    pub fn is_home(&self) -> bool {
        self.0 == "/"
    }

    /// Last path segment: the slug content is resolved by.
    pub fn slug(&self) -> Option<&str> {
        self.0.split('/').filter(|s| !s.is_empty()).next_back()
    }

    /// Path segments, leading and trailing slashes stripped.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    /// Convert to a URL hash for the address bar.
    pub fn to_hash(&self) -> String {
        format!("#{}", self.0)
    }

    /// Current route from the browser URL.
    pub fn current() -> Self {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self::new(&hash)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization() {
        assert_eq!(Route::new(""), Route::home());
        assert_eq!(Route::new("#"), Route::home());
        assert_eq!(Route::new("#/"), Route::home());
        assert_eq!(Route::new("/"), Route::home());
        assert_eq!(Route::new("about").path(), "/about/");
        assert_eq!(Route::new("/about").path(), "/about/");
        assert_eq!(Route::new("about/").path(), "/about/");
        assert_eq!(Route::new("#/about/").path(), "/about/");
        assert_eq!(Route::new("#/blog/post-1").path(), "/blog/post-1/");
    }

    #[test]
    fn test_slug_is_last_segment() {
        assert_eq!(Route::home().slug(), None);
        assert_eq!(Route::new("/about/").slug(), Some("about"));
        assert_eq!(Route::new("/blog/post-1/").slug(), Some("post-1"));
    }

    #[test]
    fn test_segments() {
        let route = Route::new("/category/news/");
        assert_eq!(route.segments().collect::<Vec<_>>(), vec!["category", "news"]);
        assert_eq!(Route::home().segments().count(), 0);
    }

    #[test]
    fn test_to_hash() {
        assert_eq!(Route::home().to_hash(), "#/");
        assert_eq!(Route::new("about").to_hash(), "#/about/");
    }
}
