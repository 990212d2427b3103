//! Handlers for the `/user` resource (own profile).

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use vellum_core::account::validate_nickname;
use vellum_core::article::format_timestamp;
use vellum_core::error::CoreError;
use vellum_core::types::DbId;
use vellum_db::models::user::{UpdateProfile, User};
use vellum_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// Profile payload returned by `/user/info`.
#[derive(Debug, Serialize)]
pub struct UserInfoResponse {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub nickname: String,
    pub avatar: String,
    pub phone: String,
    pub created_at: String,
}

impl UserInfoResponse {
    fn from_user(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            nickname: user.nickname,
            avatar: user.avatar,
            phone: user.phone,
            created_at: format_timestamp(user.created_at),
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/user/info
///
/// Profile of the authenticated user.
pub async fn get_user_info(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<UserInfoResponse>>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "user",
            id: auth.user_id,
        }))?;

    Ok(Json(DataResponse {
        data: UserInfoResponse::from_user(user),
    }))
}

/// PUT /api/v1/user/info
///
/// Partial profile update (nickname, avatar, phone).
pub async fn update_user_info(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateProfile>,
) -> AppResult<Json<DataResponse<UserInfoResponse>>> {
    if let Some(ref nickname) = input.nickname {
        validate_nickname(nickname).map_err(AppError::Core)?;
    }

    let user = UserRepo::update_profile(&state.pool, auth.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "user",
            id: auth.user_id,
        }))?;

    tracing::info!(user_id = auth.user_id, "User profile updated");

    Ok(Json(DataResponse {
        data: UserInfoResponse::from_user(user),
    }))
}
