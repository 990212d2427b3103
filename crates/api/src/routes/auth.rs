//! Route definitions for authentication.
//!
//! Registered under `/auth`.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Authentication routes, registered as `/auth`.
///
/// ```text
/// POST /register   register
/// POST /login      login
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
}
