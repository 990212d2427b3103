use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vellum_core::types::{DbId, Timestamp};

/// Autosaved work-in-progress content, at most one per (article, author).
///
/// `article_id` of 0 marks a draft for an article that does not exist yet.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArticleDraft {
    pub id: DbId,
    pub article_id: DbId,
    pub author_id: DbId,
    pub title: String,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Payload for the draft autosave endpoint.
#[derive(Debug, Deserialize)]
pub struct SaveDraft {
    /// 0 (or omitted) for a new, not-yet-created article.
    #[serde(default)]
    pub article_id: DbId,
    pub title: String,
    pub content: String,
}
