//! Handlers for the `/stories` resource.
//!
//! Provides story CRUD, the filtered/paginated list, and the dashboard
//! aggregate counts. Request bodies are shape-checked against the rule
//! tables in `storyhub_core::story` before any repository call.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;

use storyhub_core::error::CoreError;
use storyhub_core::pagination::{clamp_limit, clamp_page, Pagination};
use storyhub_core::story;
use storyhub_core::types::DbId;
use storyhub_db::models::story::{CreateStory, StoryListParams, StoryWithChapters, UpdateStory};
use storyhub_db::repositories::{ChapterRepo, StoryRepo};

use crate::error::{AppError, AppResult};
use crate::extract::validated_body;
use crate::response::{ApiResponse, PagedResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /stories
// ---------------------------------------------------------------------------

/// Create a story, along with any chapters supplied inline. The story and
/// its inline chapters commit in one transaction.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<impl IntoResponse> {
    let input: CreateStory = validated_body(body, story::CREATE_RULES)?;

    let created = StoryRepo::create(&state.pool, &input).await?;

    tracing::info!(
        story_id = created.story.id,
        chapters = created.chapters.len(),
        "Story created",
    );

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_data("Story created successfully", created)),
    ))
}

// ---------------------------------------------------------------------------
// GET /stories
// ---------------------------------------------------------------------------

/// List stories with optional search/category/status filters and pagination.
///
/// The page slice and the total count are read in one transaction, so the
/// returned `pagination` is consistent with the filter even under
/// concurrent writes.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<StoryListParams>,
) -> AppResult<impl IntoResponse> {
    // Enum-valued filters are shape-checked like any other input.
    if let Some(ref category) = params.category {
        if !story::is_valid_category(category) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Unknown category filter '{category}'"
            ))));
        }
    }
    if let Some(ref status) = params.status {
        if !story::is_valid_status(status) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Unknown status filter '{status}'"
            ))));
        }
    }

    let (stories, total) = StoryRepo::list(&state.pool, &params).await?;

    let pagination = Pagination::new(clamp_page(params.page), clamp_limit(params.limit), total);

    Ok(Json(PagedResponse::new(
        "Stories retrieved successfully",
        stories,
        pagination,
    )))
}

// ---------------------------------------------------------------------------
// GET /stories/stats/dashboard
// ---------------------------------------------------------------------------

/// Aggregate story and chapter counts for the dashboard.
pub async fn dashboard_stats(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stats = StoryRepo::dashboard_stats(&state.pool).await?;

    Ok(Json(ApiResponse::with_data(
        "Dashboard stats retrieved successfully",
        stats,
    )))
}

// ---------------------------------------------------------------------------
// GET /stories/{id}
// ---------------------------------------------------------------------------

/// Get a single story with its chapters in reading order.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let found = StoryRepo::find_with_chapters(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Story",
            id,
        }))?;

    Ok(Json(ApiResponse::with_data(
        "Story retrieved successfully",
        found,
    )))
}

// ---------------------------------------------------------------------------
// PUT /stories/{id}
// ---------------------------------------------------------------------------

/// Partially update a story. Absent fields are left unchanged; the updated
/// story is returned with its chapters.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(body): Json<Value>,
) -> AppResult<impl IntoResponse> {
    let input: UpdateStory = validated_body(body, story::UPDATE_RULES)?;

    let updated = StoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Story",
            id,
        }))?;
    let chapters = ChapterRepo::list_by_story(&state.pool, id).await?;

    tracing::info!(story_id = id, "Story updated");

    Ok(Json(ApiResponse::with_data(
        "Story updated successfully",
        StoryWithChapters {
            story: updated,
            chapters,
        },
    )))
}

// ---------------------------------------------------------------------------
// DELETE /stories/{id}
// ---------------------------------------------------------------------------

/// Delete a story; its chapters are removed by the FK cascade.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = StoryRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Story",
            id,
        }));
    }

    tracing::info!(story_id = id, "Story deleted");

    Ok(Json(ApiResponse::message_only("Story deleted successfully")))
}
