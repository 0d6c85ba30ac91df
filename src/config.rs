//! Application configuration.
//!
//! Site options live in `assets/theme.toml`, embedded at compile time and
//! parsed once at startup. Everything else here is a constant.

use serde::Deserialize;

/// Raw configuration document (loaded at compile time).
const THEME_TOML: &str = include_str!("../assets/theme.toml");

// =============================================================================
// Network Configuration
// =============================================================================

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Namespace prefix for sessionStorage cache keys.
pub const CACHE_PREFIX: &str = "wp.";

/// Default number of posts per listing page.
const DEFAULT_PER_PAGE: u32 = 10;

// =============================================================================
// Theme Options
// =============================================================================

/// Options the theme recognizes, supplied by `assets/theme.toml` and
/// read-only at runtime.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ThemeOptions {
    /// Site title, shown in the header and the document title.
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Navigation entries as (label, target) pairs, in display order.
    #[serde(default)]
    pub menu: Vec<(String, String)>,
    pub source: SourceOptions,
    #[serde(default)]
    pub featured: FeaturedOptions,
}

/// Where and how content is fetched.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SourceOptions {
    /// Root of the WordPress installation serving the REST API.
    pub url: String,
    /// Page shown at `/`; `None` shows the latest-posts feed instead.
    #[serde(default)]
    pub homepage: Option<String>,
    /// Route serving the posts archive.
    #[serde(default)]
    pub posts_page: Option<String>,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

impl SourceOptions {
    /// Base URL of the REST API (v2 namespace), no trailing slash.
    pub fn api_base(&self) -> String {
        format!("{}/wp-json/wp/v2", self.url.trim_end_matches('/'))
    }
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

/// Whether featured images render on list cards and on single views.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FeaturedOptions {
    #[serde(default)]
    pub show_on_list: bool,
    #[serde(default)]
    pub show_on_post: bool,
}

impl ThemeOptions {
    /// Parse the embedded configuration document.
    ///
    /// Panics at startup when the document is malformed; a theme without
    /// valid configuration cannot render anything.
    pub fn load() -> Self {
        toml::from_str(THEME_TOML).expect("assets/theme.toml must be valid")
    }
}
