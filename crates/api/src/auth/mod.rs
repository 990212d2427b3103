//! Credential handling.
//!
//! [`password`] wraps Argon2id hashing; [`jwt`] signs and verifies the
//! stateless access tokens.

pub mod jwt;
pub mod password;
