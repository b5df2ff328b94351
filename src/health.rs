use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tracing::error;

use crate::AppState;

/// Liveness plus a database ping.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.db.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "up",
                "database": "reachable",
            })),
        ),
        Err(err) => {
            error!("health check failed to reach database: {}", err);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "database": err.to_string(),
                })),
            )
        }
    }
}
