use serde::Serialize;
use sqlx::FromRow;
use vellum_core::types::{DbId, Timestamp};

/// An immutable snapshot of an article taken just before a mutation.
///
/// `version` is the article's version number at snapshot time, so the
/// history of an article at version N is exactly snapshots 1..N-1.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArticleVersion {
    pub id: DbId,
    pub article_id: DbId,
    pub title: String,
    pub content: String,
    pub version: i32,
    pub remark: String,
    pub created_at: Timestamp,
}
