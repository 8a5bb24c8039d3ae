//! Chapter entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storyhub_core::types::{DbId, Timestamp};

use crate::models::story::Story;

/// A chapter row from the `chapters` table. `content` is rich-text markup,
/// stored and returned verbatim.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    pub id: DbId,
    pub story_id: DbId,
    pub title: String,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A chapter with its parent story embedded.
#[derive(Debug, Clone, Serialize)]
pub struct ChapterWithStory {
    #[serde(flatten)]
    pub chapter: Chapter,
    pub story: Story,
}

/// DTO for creating a chapter. The parent story ID comes from the route.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChapter {
    pub title: String,
    pub content: String,
}

/// DTO for updating a chapter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateChapter {
    pub title: Option<String>,
    pub content: Option<String>,
}
