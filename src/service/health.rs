//! Liveness endpoint for external uptime monitors.

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;

pub const ALIVE_BODY: &str = "✅ Bot is alive";

/// `GET /` and `HEAD /` always answer 200. The router holds no state, so it
/// stays responsive while a poll cycle runs.
pub fn router() -> Router {
    Router::new().route("/", get(alive))
}

async fn alive() -> (StatusCode, &'static str) {
    tracing::info!("[HEALTH] Ping received");
    (StatusCode::OK, ALIVE_BODY)
}
