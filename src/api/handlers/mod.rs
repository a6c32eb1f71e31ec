//! Request handlers, one module per resource.

/// Assessment endpoints
pub mod assessments;
/// Cleaning line-item endpoints
pub mod cleaning;
/// Furniture endpoints
pub mod furniture;
/// Repair line-item endpoints
pub mod repairs;

use axum::{Json, response::IntoResponse};

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "reseat",
    }))
}
