//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Route`] - normalized, hash-based navigation paths
//! - [`RouteEntry`], [`ContentType`], [`EntityRef`] - route resolution state
//! - [`ContentEntity`], [`PostKind`], [`Rendered`] - fetched content
//! - [`MediaEntity`], [`SizeVariant`] - fetched media and its renditions

mod content;
mod entry;
mod media;
mod route;

pub use content::{ContentEntity, PostKind, Rendered};
pub use entry::{ContentType, EntityRef, RouteEntry};
pub use media::{MediaDetails, MediaEntity, SizeVariant};
pub use route::Route;
