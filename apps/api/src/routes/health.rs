use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Liveness probe; never touches the store.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "message": "Resume Editor API is running!",
        "status": "healthy"
    }))
}
