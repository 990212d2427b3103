//! Data access, one repository per table.
//!
//! Repositories are zero-sized structs whose async methods take a
//! `&PgPool` first argument and surface `sqlx::Error` untranslated.

pub mod article_draft_repo;
pub mod article_repo;
pub mod article_version_repo;
pub mod user_repo;

pub use article_draft_repo::ArticleDraftRepo;
pub use article_repo::ArticleRepo;
pub use article_version_repo::ArticleVersionRepo;
pub use user_repo::UserRepo;
