pub mod articles;
pub mod auth;
pub mod health;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Assemble the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                                   register (public)
/// /auth/login                                      login (public)
///
/// /articles                                        list (public), create
/// /articles/draft                                  autosave draft (POST)
/// /articles/{id}                                   get (public), update, delete
/// /articles/{id}/versions                          version history (public)
/// /articles/{id}/versions/{version_id}/restore     restore snapshot (POST)
///
/// /user/info                                       get, update own profile
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (register, login).
        .nest("/auth", auth::router())
        // Article CRUD, drafts, and version history.
        .nest("/articles", articles::router())
        // Own-profile routes.
        .nest("/user", users::router())
}
