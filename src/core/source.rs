//! WordPress REST source.
//!
//! The content store's fetch collaborator: resolves a route against the
//! remote REST API and writes the result into the store. This module is
//! the sole writer of the store. Fetches are asynchronous, idempotent and
//! deduplicated; navigating away never cancels one in flight, its result
//! simply lands in the store for a later visit.

use leptos::prelude::{Update, WithValue};
use serde::{Deserialize, Serialize};
use web_sys::console;

use crate::app::AppContext;
use crate::config::SourceOptions;
use crate::core::error::FetchError;
use crate::models::{ContentEntity, ContentType, MediaEntity, PostKind, Route};
use crate::utils::fetch::fetch_json_cached;

/// Resolve `route` and populate the store.
///
/// A route already fetching or already resolved is left alone. Transport
/// failures become an error entry and a console warning; they are never
/// propagated to the caller.
pub async fn fetch(ctx: AppContext, route: Route) {
    let started = ctx
        .source
        .try_update(|store| store.begin_fetch(&route))
        .unwrap_or(false);
    if !started {
        return;
    }

    let options = ctx.theme.with_value(|theme| theme.source.clone());
    match resolve(&options, &route).await {
        Ok(Resolution::Single { kind, entity, media }) => {
            ctx.source.update(|store| {
                if let Some(media) = media {
                    store.insert_media(media);
                }
                store.insert_single(&route, kind, entity);
            });
        }
        Ok(Resolution::Listing { kind, entities, media }) => {
            ctx.source.update(|store| {
                for item in media {
                    store.insert_media(item);
                }
                store.insert_listing(&route, kind, entities);
            });
        }
        Err(err) => {
            console::warn_1(&format!("fetch failed for {route}: {err}").into());
            ctx.source.update(|store| store.mark_error(&route));
        }
    }
}

/// Outcome of resolving a route against the remote API.
enum Resolution {
    Single {
        kind: ContentType,
        entity: ContentEntity,
        media: Option<MediaEntity>,
    },
    Listing {
        kind: ContentType,
        entities: Vec<ContentEntity>,
        media: Vec<MediaEntity>,
    },
}

/// What a route asks of the remote API.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Target {
    Home,
    PostsPage,
    Category(String),
    Single(String),
}

fn route_target(options: &SourceOptions, route: &Route) -> Target {
    if route.is_home() {
        return Target::Home;
    }
    if let Some(posts_page) = &options.posts_page
        && Route::new(posts_page) == *route
    {
        return Target::PostsPage;
    }
    let segments: Vec<&str> = route.segments().collect();
    if let ["category", slug] = segments.as_slice() {
        return Target::Category(slug.to_string());
    }
    // `slug()` is Some for every non-home route.
    Target::Single(route.slug().unwrap_or_default().to_string())
}

async fn resolve(options: &SourceOptions, route: &Route) -> Result<Resolution, FetchError> {
    match route_target(options, route) {
        Target::Home => resolve_home(options).await,
        Target::PostsPage => resolve_listing(options, None).await,
        Target::Category(slug) => resolve_category(options, &slug).await,
        Target::Single(slug) => resolve_single(options, &slug).await,
    }
}

/// The home route shows the configured homepage when one is set and it
/// exists remotely; otherwise it falls back to the latest-posts feed.
async fn resolve_home(options: &SourceOptions) -> Result<Resolution, FetchError> {
    if let Some(homepage) = &options.homepage {
        let homepage = Route::new(homepage);
        if let Some(slug) = homepage.slug() {
            if let Some(entity) = first_by_slug(options, PostKind::Page, slug).await? {
                let media = fetch_featured(options, &entity).await;
                return Ok(Resolution::Single { kind: ContentType::Home, entity, media });
            }
        }
    }

    let query = format!("posts?per_page={}", options.per_page);
    let entities = fetch_collection(options, &query).await?;
    let media = fetch_listing_media(options, &entities).await;
    Ok(Resolution::Listing { kind: ContentType::Home, entities, media })
}

async fn resolve_listing(
    options: &SourceOptions,
    category: Option<u64>,
) -> Result<Resolution, FetchError> {
    let query = match category {
        Some(id) => format!("posts?categories={}&per_page={}", id, options.per_page),
        None => format!("posts?per_page={}", options.per_page),
    };
    let entities = fetch_collection(options, &query).await?;
    let media = fetch_listing_media(options, &entities).await;
    Ok(Resolution::Listing { kind: ContentType::Archive, entities, media })
}

/// Category archives need a term-id lookup first; the posts collection
/// only filters by id.
async fn resolve_category(options: &SourceOptions, slug: &str) -> Result<Resolution, FetchError> {
    #[derive(Deserialize, Serialize)]
    struct Term {
        id: u64,
    }

    let url = endpoint_url(options, &format!("categories?slug={slug}"));
    let terms: Vec<Term> = fetch_json_cached(&url).await?;
    let term = terms.into_iter().next().ok_or(FetchError::NotFound)?;
    resolve_listing(options, Some(term.id)).await
}

/// Slugs are tried against posts, then pages, then media, mirroring how
/// the remote resolves pretty permalinks.
async fn resolve_single(options: &SourceOptions, slug: &str) -> Result<Resolution, FetchError> {
    for kind in [PostKind::Post, PostKind::Page, PostKind::Attachment] {
        if let Some(entity) = first_by_slug(options, kind, slug).await? {
            let kind = match entity.kind {
                PostKind::Post => ContentType::Post,
                PostKind::Page => ContentType::Page,
                PostKind::Attachment => ContentType::Attachment,
            };
            let media = fetch_featured(options, &entity).await;
            return Ok(Resolution::Single { kind, entity, media });
        }
    }
    Err(FetchError::NotFound)
}

/// First match for `slug` in a post-type collection; `Ok(None)` when the
/// collection has no such slug.
async fn first_by_slug(
    options: &SourceOptions,
    kind: PostKind,
    slug: &str,
) -> Result<Option<ContentEntity>, FetchError> {
    let url = endpoint_url(options, &format!("{}?slug={}", kind.endpoint(), slug));
    let matches: Vec<ContentEntity> = fetch_json_cached(&url).await?;
    Ok(matches.into_iter().next())
}

async fn fetch_collection(
    options: &SourceOptions,
    query: &str,
) -> Result<Vec<ContentEntity>, FetchError> {
    fetch_json_cached(&endpoint_url(options, query)).await
}

/// Featured media for a single entity. Best-effort: a missing or failing
/// media fetch renders no image, it never fails the route.
async fn fetch_featured(options: &SourceOptions, entity: &ContentEntity) -> Option<MediaEntity> {
    fetch_media(options, entity.featured_media?).await
}

async fn fetch_media(options: &SourceOptions, id: u64) -> Option<MediaEntity> {
    let url = endpoint_url(options, &format!("media/{id}"));
    match fetch_json_cached::<MediaEntity>(&url).await {
        Ok(media) => Some(media),
        Err(err) => {
            console::warn_1(&format!("media {id} unavailable: {err}").into());
            None
        }
    }
}

async fn fetch_listing_media(
    options: &SourceOptions,
    entities: &[ContentEntity],
) -> Vec<MediaEntity> {
    let mut media = Vec::new();
    for entity in entities {
        if let Some(item) = fetch_featured(options, entity).await {
            media.push(item);
        }
    }
    media
}

fn endpoint_url(options: &SourceOptions, query: &str) -> String {
    format!("{}/{}", options.api_base(), query)
}
