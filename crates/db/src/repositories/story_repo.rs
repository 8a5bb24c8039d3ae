//! Repository for the `stories` table.
//!
//! Includes the list/filter/pagination engine: a dynamic WHERE clause built
//! once and shared by the page query and the count query, both executed in
//! one transaction so `(data, total)` come from the same snapshot.

use sqlx::PgPool;
use storyhub_core::pagination::{clamp_limit, clamp_page};
use storyhub_core::story::{STATUS_DRAFT, STATUS_PUBLISH};
use storyhub_core::types::DbId;

use crate::models::chapter::Chapter;
use crate::models::story::{
    CreateStory, DashboardStats, Story, StoryListItem, StoryListParams, StoryWithChapters,
    UpdateStory,
};
use crate::repositories::chapter_repo::COLUMNS as CHAPTER_COLUMNS;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, author, synopsis, category, cover_url, tags, status, created_at, updated_at";

/// Column list for list rows: the entity plus a correlated chapter count.
const LIST_COLUMNS: &str = "\
    id, title, author, synopsis, category, cover_url, tags, status, created_at, updated_at, \
    (SELECT COUNT(*) FROM chapters WHERE chapters.story_id = stories.id) AS chapter_count";

/// Provides CRUD, list/filter, and aggregate operations for stories.
pub struct StoryRepo;

impl StoryRepo {
    /// Insert a new story and any inline chapters in one transaction,
    /// returning the created story with its chapters.
    pub async fn create(
        pool: &PgPool,
        input: &CreateStory,
    ) -> Result<StoryWithChapters, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO stories (title, author, synopsis, category, cover_url, tags, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let story = sqlx::query_as::<_, Story>(&query)
            .bind(&input.title)
            .bind(&input.author)
            .bind(&input.synopsis)
            .bind(&input.category)
            // An empty cover URL is stored as NULL, not "".
            .bind(input.cover_url.as_deref().filter(|s| !s.is_empty()))
            .bind(&input.tags)
            .bind(&input.status)
            .fetch_one(&mut *tx)
            .await?;

        let chapter_query = format!(
            "INSERT INTO chapters (story_id, title, content)
             VALUES ($1, $2, $3)
             RETURNING {CHAPTER_COLUMNS}"
        );
        let mut chapters = Vec::with_capacity(input.chapters.len());
        for chapter in &input.chapters {
            let created = sqlx::query_as::<_, Chapter>(&chapter_query)
                .bind(story.id)
                .bind(&chapter.title)
                .bind(&chapter.content)
                .fetch_one(&mut *tx)
                .await?;
            chapters.push(created);
        }

        tx.commit().await?;
        Ok(StoryWithChapters { story, chapters })
    }

    /// One page of stories matching the filters, plus the total match count.
    ///
    /// Ordered by most recently updated first, ties broken by descending ID.
    /// Page and count run in the same transaction.
    pub async fn list(
        pool: &PgPool,
        params: &StoryListParams,
    ) -> Result<(Vec<StoryListItem>, i64), sqlx::Error> {
        let limit = clamp_limit(params.limit);
        let offset = (clamp_page(params.page) - 1) * limit;

        let (where_clause, bind_values, bind_idx) = build_story_filter(params);

        let page_query = format!(
            "SELECT {LIST_COLUMNS} FROM stories {where_clause} \
             ORDER BY updated_at DESC, id DESC \
             LIMIT ${bind_idx} OFFSET ${}",
            bind_idx + 1
        );
        let count_query = format!("SELECT COUNT(*)::BIGINT FROM stories {where_clause}");

        let mut tx = pool.begin().await?;

        let rows = bind_filter_values(sqlx::query_as::<_, StoryListItem>(&page_query), &bind_values)
            .bind(limit)
            .bind(offset)
            .fetch_all(&mut *tx)
            .await?;

        let total = bind_filter_values_scalar(
            sqlx::query_scalar::<_, i64>(&count_query),
            &bind_values,
        )
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok((rows, total))
    }

    /// Find a story by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Story>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stories WHERE id = $1");
        sqlx::query_as::<_, Story>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a story with its chapters in reading order.
    pub async fn find_with_chapters(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<StoryWithChapters>, sqlx::Error> {
        let story = match Self::find_by_id(pool, id).await? {
            Some(story) => story,
            None => return Ok(None),
        };
        let chapters = super::ChapterRepo::list_by_story(pool, id).await?;
        Ok(Some(StoryWithChapters { story, chapters }))
    }

    /// Update a story. Only non-`None` fields in `input` are applied;
    /// `updated_at` is refreshed either way.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStory,
    ) -> Result<Option<Story>, sqlx::Error> {
        let query = format!(
            "UPDATE stories SET
                title = COALESCE($2, title),
                author = COALESCE($3, author),
                synopsis = COALESCE($4, synopsis),
                category = COALESCE($5, category),
                cover_url = COALESCE($6, cover_url),
                tags = COALESCE($7, tags),
                status = COALESCE($8, status),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Story>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.author)
            .bind(&input.synopsis)
            .bind(&input.category)
            .bind(&input.cover_url)
            .bind(&input.tags)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a story by ID; its chapters go with it via the FK cascade.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM stories WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Aggregate dashboard counts. A single statement, so all four counts
    /// observe the same snapshot.
    pub async fn dashboard_stats(pool: &PgPool) -> Result<DashboardStats, sqlx::Error> {
        sqlx::query_as::<_, DashboardStats>(
            "SELECT \
                 (SELECT COUNT(*) FROM stories)::BIGINT AS total, \
                 (SELECT COUNT(*) FROM stories WHERE status = $1)::BIGINT AS published, \
                 (SELECT COUNT(*) FROM stories WHERE status = $2)::BIGINT AS draft, \
                 (SELECT COUNT(*) FROM chapters)::BIGINT AS total_chapters",
        )
        .bind(STATUS_PUBLISH)
        .bind(STATUS_DRAFT)
        .fetch_one(pool)
        .await
    }
}

// ---------------------------------------------------------------------------
// Internal helpers for dynamic query building
// ---------------------------------------------------------------------------

/// Build a WHERE clause and bind values from the list filter parameters.
///
/// Returns `(where_clause, bind_values, next_bind_index)`. The clause is
/// empty when no filters are active, or starts with `WHERE `. The search
/// condition reuses one placeholder for both columns.
fn build_story_filter(params: &StoryListParams) -> (String, Vec<String>, u32) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_values: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;

    if let Some(search) = params.search.as_deref().filter(|s| !s.trim().is_empty()) {
        conditions.push(format!(
            "(title ILIKE ${bind_idx} OR author ILIKE ${bind_idx})"
        ));
        bind_idx += 1;
        bind_values.push(format!("%{}%", search.trim()));
    }

    if let Some(ref category) = params.category {
        conditions.push(format!("category = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(category.clone());
    }

    if let Some(ref status) = params.status {
        conditions.push(format!("status = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(status.clone());
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, bind_values, bind_idx)
}

/// Bind the filter values to a sqlx `QueryAs`.
fn bind_filter_values<'q, O>(
    mut q: sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments>,
    bind_values: &'q [String],
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments> {
    for val in bind_values {
        q = q.bind(val.as_str());
    }
    q
}

/// Bind the filter values to a sqlx `QueryScalar`.
fn bind_filter_values_scalar<'q>(
    mut q: sqlx::query::QueryScalar<'q, sqlx::Postgres, i64, sqlx::postgres::PgArguments>,
    bind_values: &'q [String],
) -> sqlx::query::QueryScalar<'q, sqlx::Postgres, i64, sqlx::postgres::PgArguments> {
    for val in bind_values {
        q = q.bind(val.as_str());
    }
    q
}
