pub mod chapter;
pub mod health;
pub mod story;
pub mod upload;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /stories                                    list, create
/// /stories/stats/dashboard                    aggregate counts
/// /stories/{id}                               get, update, delete
/// /stories/{story_id}/chapters                create
/// /stories/{story_id}/chapters/{chapter_id}   get, update
///
/// /chapters/{id}                              update, delete
///
/// /upload/cover                               cover image upload
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/stories", story::router())
        .nest("/chapters", chapter::router())
        .nest("/upload", upload::router())
}
