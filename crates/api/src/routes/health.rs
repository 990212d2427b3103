use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"`, or `"degraded"` when the database probe fails.
    pub status: &'static str,
    /// Version of this crate.
    pub version: &'static str,
    /// Result of the database probe.
    pub db_healthy: bool,
}

/// GET /health
///
/// Always answers 200; database trouble is reported in the body.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = vellum_db::health_check(&state.pool).await.is_ok();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Router for the liveness probe, mounted at the server root.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
