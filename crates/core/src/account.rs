//! Account field validation shared by registration and profile updates.

use crate::error::CoreError;

/// Minimum username length in characters.
pub const MIN_USERNAME_LEN: usize = 3;
/// Maximum username length in characters (matches the VARCHAR(50) column).
pub const MAX_USERNAME_LEN: usize = 50;
/// Maximum email length in bytes (matches the VARCHAR(100) column).
pub const MAX_EMAIL_LEN: usize = 100;
/// Maximum nickname length in bytes.
pub const MAX_NICKNAME_LEN: usize = 50;
/// Minimum password length in bytes.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Validate a username: 3-50 chars, ASCII alphanumeric plus `_` and `-`.
pub fn validate_username(username: &str) -> Result<(), CoreError> {
    let len = username.chars().count();
    if len < MIN_USERNAME_LEN || len > MAX_USERNAME_LEN {
        return Err(CoreError::Validation(format!(
            "Username must be between {MIN_USERNAME_LEN} and {MAX_USERNAME_LEN} characters"
        )));
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(CoreError::Validation(
            "Username may only contain letters, digits, underscores, and hyphens".into(),
        ));
    }
    Ok(())
}

/// Validate an email address.
///
/// Syntactic sanity only (one `@` with non-empty sides, a dot in the domain).
/// Deliverability is out of scope here.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if email.is_empty() || email.len() > MAX_EMAIL_LEN {
        return Err(CoreError::Validation(format!(
            "Email must be between 1 and {MAX_EMAIL_LEN} characters"
        )));
    }
    let Some((local, domain)) = email.split_once('@') else {
        return Err(CoreError::Validation("Email must contain '@'".into()));
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(CoreError::Validation("Email address is malformed".into()));
    }
    Ok(())
}

/// Validate a display nickname (<= 50 bytes, may be empty).
pub fn validate_nickname(nickname: &str) -> Result<(), CoreError> {
    if nickname.len() > MAX_NICKNAME_LEN {
        return Err(CoreError::Validation(format!(
            "Nickname must be at most {MAX_NICKNAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a candidate password. Minimum length is the only rule; there
/// are no composition requirements.
pub fn validate_password(password: &str) -> Result<(), CoreError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(CoreError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        )));
    }
    Ok(())
}
