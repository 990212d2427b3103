use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vellum_core::types::{DbId, Timestamp};

/// A published-or-draft article row.
///
/// `content_raw` mirrors `content` and exists for keyword search; it is
/// always written alongside `content`, never by clients directly.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Article {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub content_raw: String,
    pub cover: String,
    pub summary: String,
    pub author_id: DbId,
    pub status: i16,
    pub version: i32,
    pub view_count: i64,
    pub like_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// Payload for creating an article.
#[derive(Debug, Deserialize)]
pub struct CreateArticle {
    pub title: String,
    pub content: String,
    pub cover: Option<String>,
    pub summary: Option<String>,
    pub status: Option<i16>,
}

/// Partial update payload. `None` fields are left untouched; `remark` is
/// stored on the version snapshot taken before the update applies.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateArticle {
    pub title: Option<String>,
    pub content: Option<String>,
    pub cover: Option<String>,
    pub summary: Option<String>,
    pub status: Option<i16>,
    pub remark: Option<String>,
}

/// Query parameters accepted by the article list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ArticleListQuery {
    pub status: Option<i16>,
    pub author_id: Option<DbId>,
    pub keyword: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

/// Article joined with its author's display name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArticleWithAuthor {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub article: Article,
    pub author_name: String,
}
