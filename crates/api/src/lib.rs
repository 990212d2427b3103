//! Library side of the `vellum-api` binary.
//!
//! Everything the binary wires together (config, state, errors, routes)
//! is public here, letting integration tests assemble the same app.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;
