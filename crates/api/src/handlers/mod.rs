//! Request handlers.
//!
//! One submodule per resource. Handlers stay thin: parse and validate
//! input, call a `vellum_db` repository, wrap the result in an envelope.

pub mod articles;
pub mod auth;
pub mod users;
