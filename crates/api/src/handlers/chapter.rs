//! Handlers for chapter resources.
//!
//! Chapters are reachable two ways, mirroring the route table: nested under
//! their story (`/stories/{story_id}/chapters/...`) and flat
//! (`/chapters/{id}`). Nested routes verify the chapter belongs to the
//! story in the path.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;

use storyhub_core::chapter;
use storyhub_core::error::CoreError;
use storyhub_core::types::DbId;
use storyhub_db::models::chapter::{Chapter, ChapterWithStory, CreateChapter, UpdateChapter};
use storyhub_db::models::story::Story;
use storyhub_db::repositories::{ChapterRepo, StoryRepo};
use storyhub_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::extract::validated_body;
use crate::response::ApiResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /stories/{story_id}/chapters
// ---------------------------------------------------------------------------

/// Create a chapter under a story.
///
/// The parent existence check and the insert are two separate store calls;
/// a concurrent delete of the parent between them is accepted behavior
/// (the FK constraint is the backstop).
pub async fn create(
    State(state): State<AppState>,
    Path(story_id): Path<DbId>,
    Json(body): Json<Value>,
) -> AppResult<impl IntoResponse> {
    let input: CreateChapter = validated_body(body, chapter::PAYLOAD_RULES)?;

    let story = StoryRepo::find_by_id(&state.pool, story_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Story",
            id: story_id,
        }))?;

    let created = ChapterRepo::create(&state.pool, story_id, &input).await?;

    tracing::info!(chapter_id = created.id, story_id, "Chapter created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_data(
            "Chapter created successfully",
            ChapterWithStory {
                chapter: created,
                story,
            },
        )),
    ))
}

// ---------------------------------------------------------------------------
// GET /stories/{story_id}/chapters/{chapter_id}
// ---------------------------------------------------------------------------

/// Get a chapter with its parent story embedded.
pub async fn get_scoped(
    State(state): State<AppState>,
    Path((story_id, chapter_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let found = find_in_story(&state.pool, story_id, chapter_id).await?;
    let story = parent_story(&state.pool, &found).await?;

    Ok(Json(ApiResponse::with_data(
        "Chapter retrieved successfully",
        ChapterWithStory {
            chapter: found,
            story,
        },
    )))
}

// ---------------------------------------------------------------------------
// PUT /stories/{story_id}/chapters/{chapter_id}
// ---------------------------------------------------------------------------

/// Update a chapter through its story-scoped route.
pub async fn update_scoped(
    State(state): State<AppState>,
    Path((story_id, chapter_id)): Path<(DbId, DbId)>,
    Json(body): Json<Value>,
) -> AppResult<impl IntoResponse> {
    let input: UpdateChapter = validated_body(body, chapter::PAYLOAD_RULES)?;

    find_in_story(&state.pool, story_id, chapter_id).await?;
    apply_update(&state.pool, chapter_id, &input).await
}

// ---------------------------------------------------------------------------
// PUT /chapters/{id}
// ---------------------------------------------------------------------------

/// Update a chapter through its flat route.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<Value>,
) -> AppResult<impl IntoResponse> {
    let input: UpdateChapter = validated_body(body, chapter::PAYLOAD_RULES)?;

    apply_update(&state.pool, id, &input).await
}

// ---------------------------------------------------------------------------
// DELETE /chapters/{id}
// ---------------------------------------------------------------------------

/// Delete a chapter.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ChapterRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Chapter",
            id,
        }));
    }

    tracing::info!(chapter_id = id, "Chapter deleted");

    Ok(Json(ApiResponse::message_only("Chapter deleted successfully")))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fetch a chapter and check it belongs to the story in the path. A chapter
/// under a different story is indistinguishable from a missing one.
async fn find_in_story(
    pool: &DbPool,
    story_id: DbId,
    chapter_id: DbId,
) -> Result<Chapter, AppError> {
    ChapterRepo::find_by_id(pool, chapter_id)
        .await?
        .filter(|c| c.story_id == story_id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Chapter",
            id: chapter_id,
        }))
}

/// Fetch the parent story of a chapter. The FK guarantees it exists;
/// absence can only be a concurrent cascade delete.
async fn parent_story(pool: &DbPool, chapter: &Chapter) -> Result<Story, AppError> {
    StoryRepo::find_by_id(pool, chapter.story_id)
        .await?
        .ok_or_else(|| {
            AppError::InternalError(format!(
                "Parent story {} missing for chapter {}",
                chapter.story_id, chapter.id
            ))
        })
}

/// Apply a chapter update and build the shared response.
async fn apply_update(
    pool: &DbPool,
    id: DbId,
    input: &UpdateChapter,
) -> AppResult<impl IntoResponse> {
    let updated = ChapterRepo::update(pool, id, input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Chapter",
            id,
        }))?;
    let story = parent_story(pool, &updated).await?;

    tracing::info!(chapter_id = id, "Chapter updated");

    Ok(Json(ApiResponse::with_data(
        "Chapter updated successfully",
        ChapterWithStory {
            chapter: updated,
            story,
        },
    )))
}
