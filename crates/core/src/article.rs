//! Article status codes, input validation, and display formatting.
//!
//! These rules carry no internal dependencies, so the repository layer
//! and the HTTP handlers share them without pulling in each other.

use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Publication state of an article, stored as a SMALLINT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleStatus {
    Draft,
    Published,
    Archived,
}

impl ArticleStatus {
    /// The wire/storage code for this status (0, 1, or 2).
    pub const fn as_i16(self) -> i16 {
        match self {
            ArticleStatus::Draft => 0,
            ArticleStatus::Published => 1,
            ArticleStatus::Archived => 2,
        }
    }

    /// Parse a wire/storage code back into a status.
    pub fn from_i16(value: i16) -> Result<Self, CoreError> {
        match value {
            0 => Ok(ArticleStatus::Draft),
            1 => Ok(ArticleStatus::Published),
            2 => Ok(ArticleStatus::Archived),
            other => Err(CoreError::Validation(format!(
                "Invalid article status {other}. Valid statuses: 0 (draft), 1 (published), 2 (archived)"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Field limits
// ---------------------------------------------------------------------------

/// Maximum title length in bytes (matches the VARCHAR(255) column).
pub const MAX_TITLE_LEN: usize = 255;
/// Maximum cover URL length in bytes.
pub const MAX_COVER_LEN: usize = 500;
/// Maximum summary length in bytes.
pub const MAX_SUMMARY_LEN: usize = 500;
/// Maximum version remark length in bytes.
pub const MAX_REMARK_LEN: usize = 255;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate an article title (non-empty, <= 255 bytes).
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title cannot be empty".into()));
    }
    if title.len() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Title must be at most {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate article content (non-empty).
///
/// Content is an opaque rich-text blob; the only domain rule is that an
/// article body cannot be blank.
pub fn validate_content(content: &str) -> Result<(), CoreError> {
    if content.trim().is_empty() {
        return Err(CoreError::Validation("Content cannot be empty".into()));
    }
    Ok(())
}

/// Validate a cover image URL (<= 500 bytes, may be empty).
pub fn validate_cover(cover: &str) -> Result<(), CoreError> {
    if cover.len() > MAX_COVER_LEN {
        return Err(CoreError::Validation(format!(
            "Cover must be at most {MAX_COVER_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate an article summary (<= 500 bytes, may be empty).
pub fn validate_summary(summary: &str) -> Result<(), CoreError> {
    if summary.len() > MAX_SUMMARY_LEN {
        return Err(CoreError::Validation(format!(
            "Summary must be at most {MAX_SUMMARY_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a version remark (<= 255 bytes, may be empty).
pub fn validate_remark(remark: &str) -> Result<(), CoreError> {
    if remark.len() > MAX_REMARK_LEN {
        return Err(CoreError::Validation(format!(
            "Remark must be at most {MAX_REMARK_LEN} characters"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Display formatting
// ---------------------------------------------------------------------------

/// Timestamp layout used in API responses (`2024-05-01 13:45:00`).
pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a timestamp for API responses (UTC, second precision).
pub fn format_timestamp(ts: Timestamp) -> String {
    ts.format(DISPLAY_TIME_FORMAT).to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
