//! Handlers for the `/articles` resource.
//!
//! Reads (list, detail, version history) are public. Mutations (create,
//! update, delete, draft autosave, restore) require a Bearer token.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use vellum_core::article::{
    format_timestamp, validate_content, validate_cover, validate_remark, validate_summary,
    validate_title, ArticleStatus, MAX_TITLE_LEN,
};
use vellum_core::error::CoreError;
use vellum_core::pagination::{clamp_page, clamp_page_size};
use vellum_core::types::DbId;
use vellum_db::models::article::{
    Article, ArticleListQuery, ArticleWithAuthor, CreateArticle, UpdateArticle,
};
use vellum_db::models::article_draft::SaveDraft;
use vellum_db::models::article_version::ArticleVersion;
use vellum_db::repositories::{ArticleDraftRepo, ArticleRepo, ArticleVersionRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Article payload with display-formatted timestamps.
///
/// `author_name` is only present on read endpoints that join the author.
#[derive(Debug, Serialize)]
pub struct ArticleResponse {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub cover: String,
    pub summary: String,
    pub author_id: DbId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    pub status: i16,
    pub version: i32,
    pub view_count: i64,
    pub like_count: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl ArticleResponse {
    fn from_article(article: Article) -> Self {
        Self {
            id: article.id,
            title: article.title,
            content: article.content,
            cover: article.cover,
            summary: article.summary,
            author_id: article.author_id,
            author_name: None,
            status: article.status,
            version: article.version,
            view_count: article.view_count,
            like_count: article.like_count,
            created_at: format_timestamp(article.created_at),
            updated_at: format_timestamp(article.updated_at),
        }
    }

    fn with_author(row: ArticleWithAuthor) -> Self {
        let mut response = Self::from_article(row.article);
        response.author_name = Some(row.author_name);
        response
    }
}

/// A single entry in an article's version history.
#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub id: DbId,
    pub article_id: DbId,
    pub title: String,
    pub content: String,
    pub version: i32,
    pub remark: String,
    pub created_at: String,
}

impl VersionResponse {
    fn from_version(version: ArticleVersion) -> Self {
        Self {
            id: version.id,
            article_id: version.article_id,
            title: version.title,
            content: version.content,
            version: version.version,
            remark: version.remark,
            created_at: format_timestamp(version.created_at),
        }
    }
}

/// Acknowledgement returned by the draft autosave endpoint.
#[derive(Debug, Serialize)]
pub struct DraftSavedResponse {
    pub draft_id: DbId,
    pub saved_at: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/articles
///
/// List articles with optional status/author/keyword filters. Public.
pub async fn list_articles(
    State(state): State<AppState>,
    Query(params): Query<ArticleListQuery>,
) -> AppResult<impl IntoResponse> {
    if let Some(status) = params.status {
        ArticleStatus::from_i16(status).map_err(AppError::Core)?;
    }

    let items = ArticleRepo::list(&state.pool, &params).await?;
    let total = ArticleRepo::count(&state.pool, &params).await?;

    Ok(Json(DataResponse {
        data: PageResponse {
            items: items
                .into_iter()
                .map(ArticleResponse::with_author)
                .collect(),
            total,
            page: clamp_page(params.page),
            page_size: clamp_page_size(params.page_size),
        },
    }))
}

/// POST /api/v1/articles
///
/// Create an article at version 1. Consumes the author's new-article draft.
pub async fn create_article(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateArticle>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.title).map_err(AppError::Core)?;
    validate_content(&input.content).map_err(AppError::Core)?;
    if let Some(ref cover) = input.cover {
        validate_cover(cover).map_err(AppError::Core)?;
    }
    if let Some(ref summary) = input.summary {
        validate_summary(summary).map_err(AppError::Core)?;
    }
    if let Some(status) = input.status {
        ArticleStatus::from_i16(status).map_err(AppError::Core)?;
    }

    let article = ArticleRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        article_id = article.id,
        "Article created"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: ArticleResponse::from_article(article),
        }),
    ))
}

/// GET /api/v1/articles/{id}
///
/// Fetch one article with its author name. Public. Each fetch bumps the
/// view counter; the response carries the count as of this read.
pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let detail = ArticleRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "article",
            id,
        }))?;

    ArticleRepo::increment_view_count(&state.pool, id).await?;

    Ok(Json(DataResponse {
        data: ArticleResponse::with_author(detail),
    }))
}

/// PUT /api/v1/articles/{id}
///
/// Apply a partial update. The pre-update state is snapshotted into the
/// version ledger and the version number increments.
pub async fn update_article(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateArticle>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref title) = input.title {
        validate_title(title).map_err(AppError::Core)?;
    }
    if let Some(ref content) = input.content {
        validate_content(content).map_err(AppError::Core)?;
    }
    if let Some(ref cover) = input.cover {
        validate_cover(cover).map_err(AppError::Core)?;
    }
    if let Some(ref summary) = input.summary {
        validate_summary(summary).map_err(AppError::Core)?;
    }
    if let Some(status) = input.status {
        ArticleStatus::from_i16(status).map_err(AppError::Core)?;
    }
    if let Some(ref remark) = input.remark {
        validate_remark(remark).map_err(AppError::Core)?;
    }

    let updated = ArticleRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "article",
            id,
        }))?;

    tracing::info!(
        user_id = auth.user_id,
        article_id = id,
        version = updated.version,
        "Article updated"
    );

    Ok(Json(DataResponse {
        data: ArticleResponse::from_article(updated),
    }))
}

/// DELETE /api/v1/articles/{id}
///
/// Soft-delete an article. Its version history stays readable.
pub async fn delete_article(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ArticleRepo::soft_delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "article",
            id,
        }));
    }

    tracing::info!(user_id = auth.user_id, article_id = id, "Article deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/articles/draft
///
/// Autosave work-in-progress content. Upserts the caller's draft for the
/// given article (`article_id` 0 or omitted means "not created yet"), so
/// repeated saves overwrite rather than accumulate.
pub async fn save_draft(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<SaveDraft>,
) -> AppResult<impl IntoResponse> {
    if input.article_id < 0 {
        return Err(AppError::Core(CoreError::Validation(
            "article_id must be zero or a positive id".into(),
        )));
    }
    // Drafts may be empty mid-edit; only the column limit applies.
    if input.title.len() > MAX_TITLE_LEN {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Draft title must be at most {MAX_TITLE_LEN} characters"
        ))));
    }

    let draft = ArticleDraftRepo::upsert(
        &state.pool,
        input.article_id,
        auth.user_id,
        &input.title,
        &input.content,
    )
    .await?;

    tracing::debug!(
        user_id = auth.user_id,
        article_id = input.article_id,
        draft_id = draft.id,
        "Draft autosaved"
    );

    Ok(Json(DataResponse {
        data: DraftSavedResponse {
            draft_id: draft.id,
            saved_at: format_timestamp(draft.updated_at),
        },
    }))
}

/// GET /api/v1/articles/{id}/versions
///
/// Version history for an article, newest snapshot first. Public. History
/// remains available even after the article is soft-deleted.
pub async fn list_versions(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let versions = ArticleVersionRepo::list_by_article(&state.pool, id).await?;

    Ok(Json(DataResponse {
        data: versions
            .into_iter()
            .map(VersionResponse::from_version)
            .collect::<Vec<_>>(),
    }))
}

/// POST /api/v1/articles/{id}/versions/{version_id}/restore
///
/// Restore an article to a previous snapshot. The restore itself is a
/// versioned update, so history keeps moving forward.
pub async fn restore_version(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((id, version_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    ArticleRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "article",
            id,
        }))?;

    let snapshot = ArticleVersionRepo::find_by_id(&state.pool, version_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "article version",
            id: version_id,
        }))?;

    // Refused when the snapshot belongs to a different article.
    let restored = ArticleRepo::restore_version(&state.pool, id, &snapshot)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "article version",
            id: version_id,
        }))?;

    tracing::info!(
        user_id = auth.user_id,
        article_id = id,
        restored_from = snapshot.version,
        version = restored.version,
        "Article restored to prior version"
    );

    Ok(Json(DataResponse {
        data: ArticleResponse::from_article(restored),
    }))
}
