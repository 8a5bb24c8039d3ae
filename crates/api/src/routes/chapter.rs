//! Route definitions for the flat `/chapters` resource.
//!
//! Chapter creation and story-scoped reads live under `/stories` (see
//! `routes::story`); the editor's update/delete calls address chapters
//! directly by ID.

use axum::routing::put;
use axum::Router;

use crate::handlers::chapter;
use crate::state::AppState;

/// Routes mounted at `/chapters`.
///
/// ```text
/// PUT    /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{id}", put(chapter::update).delete(chapter::delete))
}
