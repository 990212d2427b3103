use crate::models::article::{Article, ArticleListQuery, ArticleWithAuthor, CreateArticle, UpdateArticle};
use crate::models::article_version::ArticleVersion;
use crate::repositories::{ArticleDraftRepo, ArticleVersionRepo};
use sqlx::PgPool;
use vellum_core::article::ArticleStatus;
use vellum_core::pagination::{clamp_page, clamp_page_size, page_offset};
use vellum_core::types::DbId;

const COLUMNS: &str = "id, title, content, content_raw, cover, summary, author_id, status, \
                       version, view_count, like_count, created_at, updated_at, deleted_at";

const JOINED_COLUMNS: &str = "a.id, a.title, a.content, a.content_raw, a.cover, a.summary, \
                              a.author_id, a.status, a.version, a.view_count, a.like_count, \
                              a.created_at, a.updated_at, a.deleted_at, \
                              COALESCE(NULLIF(u.nickname, ''), u.username) AS author_name";

/// Repository for articles and the mutations that version them.
pub struct ArticleRepo;

impl ArticleRepo {
    /// Insert an article at version 1 and clear the author's new-article
    /// draft if one exists. The draft cleanup is best effort: a failure is
    /// logged but never fails the create.
    pub async fn create(
        pool: &PgPool,
        author_id: DbId,
        input: &CreateArticle,
    ) -> Result<Article, sqlx::Error> {
        let query = format!(
            "INSERT INTO articles (title, content, content_raw, cover, summary, author_id, status)
             VALUES ($1, $2, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let article = sqlx::query_as::<_, Article>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.cover.as_deref().unwrap_or(""))
            .bind(input.summary.as_deref().unwrap_or(""))
            .bind(author_id)
            .bind(input.status.unwrap_or(ArticleStatus::Draft.as_i16()))
            .fetch_one(pool)
            .await?;

        if let Err(err) = ArticleDraftRepo::delete_new_article_draft(pool, author_id).await {
            tracing::warn!(author_id, error = %err, "Failed to clean up new-article draft");
        }

        Ok(article)
    }

    /// Fetch a live (not soft-deleted) article.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch a live article joined with its author's display name.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ArticleWithAuthor>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM articles a
             JOIN users u ON u.id = a.author_id
             WHERE a.id = $1 AND a.deleted_at IS NULL"
        );
        sqlx::query_as::<_, ArticleWithAuthor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Apply a partial update after snapshotting the article's current
    /// state into the version ledger, all in one transaction.
    ///
    /// The row is locked for the duration, so concurrent updates serialize
    /// and each one snapshots a distinct version. The version number always
    /// increments, even when every payload field is `None`.
    ///
    /// Returns `Ok(None)` when the article is missing or soft-deleted.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateArticle,
    ) -> Result<Option<Article>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let select = format!(
            "SELECT {COLUMNS} FROM articles WHERE id = $1 AND deleted_at IS NULL FOR UPDATE"
        );
        let Some(current) = sqlx::query_as::<_, Article>(&select)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        ArticleVersionRepo::create(
            &mut *tx,
            current.id,
            &current.title,
            &current.content,
            current.version,
            input.remark.as_deref().unwrap_or(""),
        )
        .await?;

        let update = format!(
            "UPDATE articles
             SET title = COALESCE($2, title),
                 content = COALESCE($3, content),
                 content_raw = COALESCE($3, content_raw),
                 cover = COALESCE($4, cover),
                 summary = COALESCE($5, summary),
                 status = COALESCE($6, status),
                 version = version + 1,
                 updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Article>(&update)
            .bind(id)
            .bind(input.title.as_deref())
            .bind(input.content.as_deref())
            .bind(input.cover.as_deref())
            .bind(input.summary.as_deref())
            .bind(input.status)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(updated))
    }

    /// Restore an article to a snapshot's title and content.
    ///
    /// Restoration is additive: it goes through [`Self::update`], so the
    /// pre-restore state is snapshotted and the version number still moves
    /// forward. Returns `Ok(None)` when the snapshot belongs to a different
    /// article or the article is gone.
    pub async fn restore_version(
        pool: &PgPool,
        article_id: DbId,
        snapshot: &ArticleVersion,
    ) -> Result<Option<Article>, sqlx::Error> {
        if snapshot.article_id != article_id {
            return Ok(None);
        }
        let input = UpdateArticle {
            title: Some(snapshot.title.clone()),
            content: Some(snapshot.content.clone()),
            remark: Some(format!("Restored from version {}", snapshot.version)),
            ..UpdateArticle::default()
        };
        Self::update(pool, article_id, &input).await
    }

    /// Soft-delete by stamping `deleted_at`. Returns `false` if the row was
    /// already deleted or never existed. Version history stays readable.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE articles SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Bump the view counter without touching `updated_at`.
    pub async fn increment_view_count(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE articles SET view_count = view_count + 1 WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// List live articles matching the filter, newest first, paginated.
    pub async fn list(
        pool: &PgPool,
        query: &ArticleListQuery,
    ) -> Result<Vec<ArticleWithAuthor>, sqlx::Error> {
        let page = clamp_page(query.page);
        let page_size = clamp_page_size(query.page_size);
        let offset = page_offset(page, page_size);

        let (where_clause, bind_values, bind_idx) = build_article_filter(query);
        let sql = format!(
            "SELECT {JOINED_COLUMNS}
             FROM articles a
             JOIN users u ON u.id = a.author_id
             {where_clause}
             ORDER BY a.created_at DESC, a.id DESC
             LIMIT ${bind_idx} OFFSET ${offset_idx}",
            offset_idx = bind_idx + 1
        );

        let query_as = sqlx::query_as::<_, ArticleWithAuthor>(&sql);
        bind_filter_values(query_as, &bind_values)
            .bind(page_size)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Total number of live articles matching the filter, ignoring pagination.
    pub async fn count(pool: &PgPool, query: &ArticleListQuery) -> Result<i64, sqlx::Error> {
        let (where_clause, bind_values, _) = build_article_filter(query);
        let sql = format!("SELECT COUNT(*) FROM articles a {where_clause}");

        let query_scalar = sqlx::query_scalar::<_, i64>(&sql);
        bind_filter_values_scalar(query_scalar, &bind_values)
            .fetch_one(pool)
            .await
    }
}

// ---------------------------------------------------------------------------
// Dynamic filter plumbing
// ---------------------------------------------------------------------------

enum BindValue {
    SmallInt(i16),
    BigInt(i64),
    Text(String),
}

/// Build the WHERE clause for a list/count query. Returns the clause, the
/// values to bind in order, and the next free bind index.
fn build_article_filter(query: &ArticleListQuery) -> (String, Vec<BindValue>, usize) {
    let mut conditions: Vec<String> = vec!["a.deleted_at IS NULL".to_string()];
    let mut bind_values: Vec<BindValue> = Vec::new();
    let mut bind_idx = 1usize;

    if let Some(status) = query.status {
        conditions.push(format!("a.status = ${bind_idx}"));
        bind_values.push(BindValue::SmallInt(status));
        bind_idx += 1;
    }

    if let Some(author_id) = query.author_id {
        conditions.push(format!("a.author_id = ${bind_idx}"));
        bind_values.push(BindValue::BigInt(author_id));
        bind_idx += 1;
    }

    if let Some(ref keyword) = query.keyword {
        if !keyword.is_empty() {
            // One bind, referenced twice.
            conditions.push(format!(
                "(a.title ILIKE ${bind_idx} OR a.content_raw ILIKE ${bind_idx})"
            ));
            bind_values.push(BindValue::Text(format!("%{keyword}%")));
            bind_idx += 1;
        }
    }

    let where_clause = format!("WHERE {}", conditions.join(" AND "));
    (where_clause, bind_values, bind_idx)
}

fn bind_filter_values<'q>(
    mut query: sqlx::query::QueryAs<'q, sqlx::Postgres, ArticleWithAuthor, sqlx::postgres::PgArguments>,
    bind_values: &'q [BindValue],
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, ArticleWithAuthor, sqlx::postgres::PgArguments> {
    for value in bind_values {
        query = match value {
            BindValue::SmallInt(v) => query.bind(v),
            BindValue::BigInt(v) => query.bind(v),
            BindValue::Text(v) => query.bind(v),
        };
    }
    query
}

fn bind_filter_values_scalar<'q>(
    mut query: sqlx::query::QueryScalar<'q, sqlx::Postgres, i64, sqlx::postgres::PgArguments>,
    bind_values: &'q [BindValue],
) -> sqlx::query::QueryScalar<'q, sqlx::Postgres, i64, sqlx::postgres::PgArguments> {
    for value in bind_values {
        query = match value {
            BindValue::SmallInt(v) => query.bind(v),
            BindValue::BigInt(v) => query.bind(v),
            BindValue::Text(v) => query.bind(v),
        };
    }
    query
}
