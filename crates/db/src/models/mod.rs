//! Row structs and DTOs, one submodule per table.
//!
//! The pattern in each module: a `FromRow` + `Serialize` entity that
//! mirrors the row, a create DTO for inserts, and an all-`Option`
//! update DTO for partial edits.

pub mod article;
pub mod article_draft;
pub mod article_version;
pub mod user;
