use crate::models::article_draft::ArticleDraft;
use sqlx::PgPool;
use vellum_core::types::DbId;

const COLUMNS: &str = "id, article_id, author_id, title, content, created_at, updated_at";

/// `article_id` marking a draft for an article that has not been created yet.
pub const NEW_ARTICLE_DRAFT_ID: DbId = 0;

/// Repository for autosaved drafts, keyed by (article, author).
pub struct ArticleDraftRepo;

impl ArticleDraftRepo {
    /// Insert a draft, or overwrite the existing one for the same
    /// (article, author) pair in a single atomic statement.
    pub async fn upsert(
        pool: &PgPool,
        article_id: DbId,
        author_id: DbId,
        title: &str,
        content: &str,
    ) -> Result<ArticleDraft, sqlx::Error> {
        let query = format!(
            "INSERT INTO article_drafts (article_id, author_id, title, content)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (article_id, author_id)
             DO UPDATE SET title = EXCLUDED.title,
                           content = EXCLUDED.content,
                           updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ArticleDraft>(&query)
            .bind(article_id)
            .bind(author_id)
            .bind(title)
            .bind(content)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_owner(
        pool: &PgPool,
        article_id: DbId,
        author_id: DbId,
    ) -> Result<Option<ArticleDraft>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM article_drafts WHERE article_id = $1 AND author_id = $2"
        );
        sqlx::query_as::<_, ArticleDraft>(&query)
            .bind(article_id)
            .bind(author_id)
            .fetch_optional(pool)
            .await
    }

    /// Remove an author's new-article draft once the article exists.
    /// Returns `false` if there was none.
    pub async fn delete_new_article_draft(
        pool: &PgPool,
        author_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM article_drafts WHERE article_id = $1 AND author_id = $2",
        )
        .bind(NEW_ARTICLE_DRAFT_ID)
        .bind(author_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
