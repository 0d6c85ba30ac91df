//! Theme components built with Leptos.
//!
//! - [`router`] - hash-based routing (main entry point)
//! - [`Theme`] - classification to template switch
//! - [`HomeView`], [`PostView`], [`ListView`], [`LoadingView`],
//!   [`PageError`] - one component per template
//! - [`FeaturedMedia`] - responsive featured image
//! - [`Header`] - site header and navigation menu

mod featured_media;
mod header;
mod home;
pub mod list;
mod loading;
mod page_error;
mod post;
pub mod router;
mod theme;

pub use featured_media::FeaturedMedia;
pub use header::Header;
pub use home::HomeView;
pub use list::ListView;
pub use loading::LoadingView;
pub use page_error::PageError;
pub use post::PostView;
pub use router::AppRouter;
pub use theme::Theme;
