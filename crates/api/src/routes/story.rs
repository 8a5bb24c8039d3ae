//! Route definitions for the `/stories` resource.
//!
//! Also nests chapter creation and story-scoped chapter routes under
//! `/stories/{story_id}/chapters/...`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{chapter, story};
use crate::state::AppState;

/// Routes mounted at `/stories`.
///
/// ```text
/// POST   /                                    -> create
/// GET    /                                    -> list
/// GET    /stats/dashboard                     -> dashboard_stats
/// GET    /{id}                                -> get_by_id
/// PUT    /{id}                                -> update
/// DELETE /{id}                                -> delete
///
/// POST   /{story_id}/chapters                 -> chapter::create
/// GET    /{story_id}/chapters/{chapter_id}    -> chapter::get_scoped
/// PUT    /{story_id}/chapters/{chapter_id}    -> chapter::update_scoped
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(story::create).get(story::list))
        .route("/stats/dashboard", get(story::dashboard_stats))
        .route(
            "/{id}",
            get(story::get_by_id)
                .put(story::update)
                .delete(story::delete),
        )
        .route("/{story_id}/chapters", post(chapter::create))
        .route(
            "/{story_id}/chapters/{chapter_id}",
            get(chapter::get_scoped).put(chapter::update_scoped),
        )
}
