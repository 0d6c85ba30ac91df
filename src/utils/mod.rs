//! Browser, network and formatting utilities.
//!
//! Provides:
//! - [`fetch`] - REST fetching with timeout racing and session caching
//! - [`cache`] - sessionStorage-backed response cache
//! - [`dom`] - window, storage and document-title helpers
//! - [`format`] - human-readable dates
//! - [`markup`] - HTML sanitization policies for bodies and excerpts

pub mod cache;
pub mod dom;
pub mod fetch;
pub mod format;
pub mod markup;
