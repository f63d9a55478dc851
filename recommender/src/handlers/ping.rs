use axum::Json;
use serde_json::{json, Value};

pub async fn ping_handler() -> Json<Value> {
    // The catalog is loaded before the server binds, so being up means ready
    Json(json!({
        "status": "healthy"
    }))
}
