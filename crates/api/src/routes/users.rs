//! Route definitions for the authenticated user's own profile.
//!
//! Registered under `/user`.

use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Own-profile routes, registered as `/user`.
///
/// ```text
/// GET /info   get_user_info
/// PUT /info   update_user_info
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/info",
        get(users::get_user_info).put(users::update_user_info),
    )
}
