use serde::Deserialize;
use sqlx::FromRow;
use vellum_core::types::{DbId, Timestamp};

/// A user account row.
///
/// Not `Serialize`: `password_hash` must never leave the process. API
/// responses use their own view structs.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub nickname: String,
    pub avatar: String,
    pub phone: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert payload. `password_hash` is already hashed by the caller.
#[derive(Debug)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub nickname: String,
}

/// Partial profile update. `None` fields are left untouched.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfile {
    pub nickname: Option<String>,
    pub avatar: Option<String>,
    pub phone: Option<String>,
}
