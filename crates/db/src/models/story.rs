//! Story entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storyhub_core::types::{DbId, Timestamp};

use crate::models::chapter::Chapter;

/// A story row from the `stories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: DbId,
    pub title: String,
    pub author: String,
    pub synopsis: String,
    pub category: String,
    pub cover_url: Option<String>,
    pub tags: Vec<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A story list row: the entity annotated with its chapter count.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryListItem {
    pub id: DbId,
    pub title: String,
    pub author: String,
    pub synopsis: String,
    pub category: String,
    pub cover_url: Option<String>,
    pub tags: Vec<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub chapter_count: i64,
}

/// A story with its chapters in reading order.
#[derive(Debug, Clone, Serialize)]
pub struct StoryWithChapters {
    #[serde(flatten)]
    pub story: Story,
    pub chapters: Vec<Chapter>,
}

/// A chapter supplied inline with story creation.
#[derive(Debug, Clone, Deserialize)]
pub struct InlineChapter {
    pub title: String,
    pub content: String,
}

/// DTO for creating a new story. Inline chapters, when supplied, are
/// inserted in the same transaction as the story.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStory {
    pub title: String,
    pub author: String,
    pub synopsis: String,
    pub category: String,
    pub cover_url: Option<String>,
    pub tags: Vec<String>,
    pub status: String,
    #[serde(default)]
    pub chapters: Vec<InlineChapter>,
}

/// DTO for updating an existing story. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStory {
    pub title: Option<String>,
    pub author: Option<String>,
    pub synopsis: Option<String>,
    pub category: Option<String>,
    pub cover_url: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<String>,
}

/// Query parameters for listing stories.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoryListParams {
    pub search: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Aggregate dashboard counts, read in a single statement.
#[derive(Debug, Clone, FromRow, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total: i64,
    pub published: i64,
    pub draft: i64,
    pub total_chapters: i64,
}
