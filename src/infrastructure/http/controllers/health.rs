use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::infrastructure::http::middleware::AppState;

// GET /health
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match state.db.ping().await {
        Ok(()) => {
            tracing::debug!("/health health_check called, status ok");
            (StatusCode::OK, Json(json!({ "status": "ok" })))
        }
        Err(e) => {
            tracing::warn!("/health health_check called, pool unavailable: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unavailable" })),
            )
        }
    }
}
