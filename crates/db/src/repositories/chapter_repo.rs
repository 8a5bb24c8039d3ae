//! Repository for the `chapters` table.

use sqlx::PgPool;
use storyhub_core::types::DbId;

use crate::models::chapter::{Chapter, CreateChapter, UpdateChapter};

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str = "id, story_id, title, content, created_at, updated_at";

/// Provides CRUD operations for chapters.
pub struct ChapterRepo;

impl ChapterRepo {
    /// Insert a new chapter under a story, returning the created row.
    ///
    /// Callers check that the parent story exists first; the foreign key is
    /// the backstop, not the primary guard.
    pub async fn create(
        pool: &PgPool,
        story_id: DbId,
        input: &CreateChapter,
    ) -> Result<Chapter, sqlx::Error> {
        let query = format!(
            "INSERT INTO chapters (story_id, title, content)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Chapter>(&query)
            .bind(story_id)
            .bind(&input.title)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// Find a chapter by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Chapter>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM chapters WHERE id = $1");
        sqlx::query_as::<_, Chapter>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a story's chapters in reading order (oldest first, ties broken
    /// by insertion order).
    pub async fn list_by_story(pool: &PgPool, story_id: DbId) -> Result<Vec<Chapter>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM chapters
             WHERE story_id = $1
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Chapter>(&query)
            .bind(story_id)
            .fetch_all(pool)
            .await
    }

    /// Update a chapter. Only non-`None` fields in `input` are applied;
    /// `updated_at` is refreshed either way.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateChapter,
    ) -> Result<Option<Chapter>, sqlx::Error> {
        let query = format!(
            "UPDATE chapters SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Chapter>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .fetch_optional(pool)
            .await
    }

    /// Delete a chapter by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM chapters WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
