//! Route definitions for articles, drafts, and version history.
//!
//! Registered under `/articles`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::articles;
use crate::state::AppState;

/// Article routes, registered as `/articles`.
///
/// ```text
/// GET    /                                     list_articles
/// POST   /                                     create_article
/// POST   /draft                                save_draft
/// GET    /{id}                                 get_article
/// PUT    /{id}                                 update_article
/// DELETE /{id}                                 delete_article
/// GET    /{id}/versions                        list_versions
/// POST   /{id}/versions/{version_id}/restore   restore_version
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(articles::list_articles).post(articles::create_article),
        )
        .route("/draft", post(articles::save_draft))
        .route(
            "/{id}",
            get(articles::get_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
        .route("/{id}/versions", get(articles::list_versions))
        .route(
            "/{id}/versions/{version_id}/restore",
            post(articles::restore_version),
        )
}
