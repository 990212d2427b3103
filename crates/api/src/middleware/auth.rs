//! Request authentication via `Authorization: Bearer` headers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use vellum_core::error::CoreError;
use vellum_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Identity of the caller, proven by a valid Bearer token.
///
/// Handlers opt into authentication by taking this extractor; routes
/// without it stay public. Every rejection is a 401 with a short reason.
///
/// ```ignore
/// async fn save_draft(user: AuthUser, /* ... */) -> AppResult<Json<DraftBody>> {
///     // user.user_id carries the id from the token's `sub` claim
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    /// Database id of the authenticated user.
    pub user_id: DbId,
}

fn unauthorized(message: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(message.into()))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get("authorization")
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| unauthorized("Missing Authorization header"))?;

        let token = header.strip_prefix("Bearer ").ok_or_else(|| {
            unauthorized("Invalid Authorization format. Expected: Bearer <token>")
        })?;

        let claims = validate_token(token, &state.config.jwt)
            .map_err(|_| unauthorized("Invalid or expired token"))?;

        Ok(AuthUser {
            user_id: claims.sub,
        })
    }
}
