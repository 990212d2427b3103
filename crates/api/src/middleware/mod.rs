//! Extractors that run before handlers.
//!
//! [`auth::AuthUser`] turns a Bearer token into the caller's identity.

pub mod auth;
