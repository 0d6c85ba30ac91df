//! Template selection.

use super::classifier::Classification;

/// Handle for the template a classification renders with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Template {
    Loading,
    Home,
    /// Single-content template; also serves attachments through its
    /// attachment branch.
    Page,
    /// Archive listing template.
    List,
    Post,
    Error,
}

/// Map a classification to its template.
///
/// Total over [`Classification`]. `Unknown` resolves to the error
/// template; a route that exists but cannot be placed must never render
/// blank.
pub fn select_template(classification: Classification) -> Template {
    match classification {
        Classification::Loading => Template::Loading,
        Classification::Home => Template::Home,
        Classification::Page => Template::Page,
        Classification::Archive => Template::List,
        Classification::Post => Template::Post,
        Classification::Attachment => Template::Page,
        Classification::Error | Classification::Unknown => Template::Error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ContentStore, classify};
    use crate::models::{ContentEntity, ContentType, PostKind, Route};

    #[test]
    fn test_total_over_all_classifications() {
        for classification in Classification::ALL {
            // The match itself is exhaustive; this pins the mapping.
            let _ = select_template(classification);
        }
    }

    #[test]
    fn test_direct_mappings() {
        assert_eq!(select_template(Classification::Loading), Template::Loading);
        assert_eq!(select_template(Classification::Home), Template::Home);
        assert_eq!(select_template(Classification::Page), Template::Page);
        assert_eq!(select_template(Classification::Archive), Template::List);
        assert_eq!(select_template(Classification::Post), Template::Post);
        assert_eq!(select_template(Classification::Error), Template::Error);
    }

    #[test]
    fn test_attachment_uses_page_template() {
        assert_eq!(select_template(Classification::Attachment), Template::Page);
    }

    #[test]
    fn test_unknown_resolves_to_error_template() {
        assert_eq!(select_template(Classification::Unknown), Template::Error);
    }

    // Classification and dispatch composed, over real store states.

    #[test]
    fn test_ready_home_route_selects_home_template() {
        let mut store = ContentStore::new();
        let route = Route::home();
        store.begin_fetch(&route);
        store.insert_single(
            &route,
            ContentType::Home,
            ContentEntity::fixture(PostKind::Page, 9, "home"),
        );
        assert_eq!(select_template(classify(&store, &route)), Template::Home);
    }

    #[test]
    fn test_failed_route_selects_error_template() {
        let mut store = ContentStore::new();
        let route = Route::new("/missing/");
        store.begin_fetch(&route);
        store.mark_error(&route);
        assert_eq!(select_template(classify(&store, &route)), Template::Error);
    }

    #[test]
    fn test_in_flight_route_selects_loading_template() {
        let mut store = ContentStore::new();
        let route = Route::new("/blog/post-1/");
        store.begin_fetch(&route);
        assert_eq!(select_template(classify(&store, &route)), Template::Loading);
    }
}
