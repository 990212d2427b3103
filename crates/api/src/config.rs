use crate::auth::jwt::JwtConfig;

/// HTTP server settings, read once at startup.
///
/// Every value falls back to a local-development default so the server
/// starts with no environment prepared. Deployments override individual
/// knobs through environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind, from `HOST` (default `0.0.0.0`).
    pub host: String,
    /// TCP port to bind, from `PORT` (default `3000`).
    pub port: u16,
    /// Origins accepted by CORS, from the comma-separated `CORS_ORIGINS`
    /// (default `http://localhost:5173`, the Vite dev server).
    pub cors_origins: Vec<String>,
    /// Per-request timeout in seconds, from `REQUEST_TIMEOUT_SECS`
    /// (default `30`).
    pub request_timeout_secs: u64,
    /// Token signing settings, see [`JwtConfig::from_env`].
    pub jwt: JwtConfig,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

impl ServerConfig {
    /// Read the full configuration from the environment.
    ///
    /// Panics if a numeric variable fails to parse.
    pub fn from_env() -> Self {
        let port = env_or("PORT", "3000")
            .parse()
            .expect("PORT must be a number between 0 and 65535");

        let request_timeout_secs = env_or("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a number of seconds");

        let cors_origins = env_or("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        Self {
            host: env_or("HOST", "0.0.0.0"),
            port,
            cors_origins,
            request_timeout_secs,
            jwt: JwtConfig::from_env(),
        }
    }
}
