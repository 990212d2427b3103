//! Signing and verification of access tokens.
//!
//! Tokens are stateless HS256 JWTs. The server keeps no session table,
//! so a token stays usable until its `exp` passes.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vellum_core::types::DbId;

/// Payload carried inside every access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Database id of the user the token was issued to.
    pub sub: DbId,
    /// Unix timestamp after which the token is rejected.
    pub exp: i64,
    /// Unix timestamp of issuance.
    pub iat: i64,
    /// Random UUID so individual tokens can be told apart in logs.
    pub jti: String,
}

/// Signing secret and token lifetime.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 key material, shared by signing and verification.
    pub secret: String,
    /// Lifetime of issued tokens, in minutes.
    pub access_token_expiry_mins: i64,
}

const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 30;

impl JwtConfig {
    /// Read token settings from the environment.
    ///
    /// `JWT_SECRET` is mandatory and must be non-empty; startup aborts
    /// without it. `JWT_ACCESS_EXPIRY_MINS` defaults to `30`.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        assert!(!secret.is_empty(), "JWT_SECRET is empty");

        let access_token_expiry_mins = match std::env::var("JWT_ACCESS_EXPIRY_MINS") {
            Ok(raw) => raw
                .parse()
                .expect("JWT_ACCESS_EXPIRY_MINS must be a number of minutes"),
            Err(_) => DEFAULT_ACCESS_EXPIRY_MINS,
        };

        Self {
            secret,
            access_token_expiry_mins,
        }
    }
}

/// Sign a fresh HS256 token for `user_id`.
///
/// Expiry is `iat` plus the configured lifetime.
pub fn generate_access_token(
    user_id: DbId,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let issued_at = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: user_id,
        exp: issued_at + config.access_token_expiry_mins * 60,
        iat: issued_at,
        jti: Uuid::new_v4().to_string(),
    };

    let key = EncodingKey::from_secret(config.secret.as_bytes());
    encode(&Header::default(), &claims, &key)
}

/// Decode a token, verifying its signature and expiry.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(config.secret.as_bytes());
    // Validation::default() is HS256 with exp checking and 60s leeway.
    decode::<Claims>(token, &key, &Validation::default()).map(|data| data.claims)
}
