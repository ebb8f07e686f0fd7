//! HTTP route handlers for the diagnostic server.

pub mod analyze;

use axum::Json;

use crate::dto::HealthResponse;
use crate::error::AppError;

/// Service health check
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "System",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Fallback for unmatched routes.
pub async fn not_found() -> AppError {
    AppError::NotFound("Not Found".into())
}
