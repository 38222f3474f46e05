use axum::Json;
use serde_json::{json, Value};

/// GET /test
/// Returns a fixed JSON test message.
pub async fn test_handler() -> Json<Value> {
    Json(json!({ "message": "Hello, World!" }))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-api"
    }))
}
