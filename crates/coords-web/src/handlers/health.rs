//! Service banner and health check.

use axum::extract::Json;
use coords::models::utc_now;
use serde_json::json;

/// GET /api/
pub async fn root() -> Json<serde_json::Value> {
    Json(json!({ "message": "Coords API v1.0", "status": "operational" }))
}

/// GET /api/health
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy", "timestamp": utc_now().to_rfc3339() }))
}
