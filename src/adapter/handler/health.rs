use axum::response::IntoResponse;
use axum::Json;

/// GET /healthz
pub async fn healthz() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok", "service": "kafka-gateway"}))
}

/// GET /readyz
pub async fn readyz() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ready"}))
}
