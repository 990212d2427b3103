use crate::models::article_version::ArticleVersion;
use sqlx::PgPool;
use vellum_core::types::DbId;

const COLUMNS: &str = "id, article_id, title, content, version, remark, created_at";

/// Repository for the append-only article version ledger.
pub struct ArticleVersionRepo;

impl ArticleVersionRepo {
    /// Append a snapshot of an article's pre-mutation state.
    ///
    /// Generic over the executor so callers can run it on an open
    /// transaction alongside the mutation it records.
    pub async fn create<'e, E>(
        executor: E,
        article_id: DbId,
        title: &str,
        content: &str,
        version: i32,
        remark: &str,
    ) -> Result<ArticleVersion, sqlx::Error>
    where
        E: sqlx::PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO article_versions (article_id, title, content, version, remark)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ArticleVersion>(&query)
            .bind(article_id)
            .bind(title)
            .bind(content)
            .bind(version)
            .bind(remark)
            .fetch_one(executor)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ArticleVersion>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM article_versions WHERE id = $1");
        sqlx::query_as::<_, ArticleVersion>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// All snapshots for an article, newest version first.
    pub async fn list_by_article(
        pool: &PgPool,
        article_id: DbId,
    ) -> Result<Vec<ArticleVersion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM article_versions WHERE article_id = $1 ORDER BY version DESC"
        );
        sqlx::query_as::<_, ArticleVersion>(&query)
            .bind(article_id)
            .fetch_all(pool)
            .await
    }
}
