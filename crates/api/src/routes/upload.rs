//! Route definitions for `/upload`.

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::handlers::upload;
use crate::state::AppState;

/// Transport-level body cap for multipart uploads. The configured per-file
/// limit is enforced in the handler; this just keeps axum's default 2 MB
/// body limit from rejecting covers below that limit.
const UPLOAD_BODY_LIMIT: usize = 16 * 1024 * 1024;

/// Routes mounted at `/upload`.
///
/// ```text
/// POST /cover   -> upload_cover
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cover", post(upload::upload_cover))
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT))
}
