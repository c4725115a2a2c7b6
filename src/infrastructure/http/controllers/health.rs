use axum::Json;
use serde_json::{json, Value};

/// GET /health - Liveness probe, never touches the upstream API
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
