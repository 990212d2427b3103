/// Primary keys are BIGSERIAL across every table.
pub type DbId = i64;

/// Timestamps are stored and served in UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
