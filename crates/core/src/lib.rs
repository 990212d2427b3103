//! Domain layer shared by the persistence and API crates.
//!
//! Deliberately dependency-light so repositories, HTTP handlers, and any
//! future CLI tooling can share the same types and validation rules.

pub mod account;
pub mod article;
pub mod error;
pub mod pagination;
pub mod types;
