use axum::response::Json;
use serde_json::{json, Value};
use tracing::instrument;

/// 健康检查
#[instrument]
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "portfolio-api"
    }))
}
