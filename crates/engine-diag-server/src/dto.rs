use chrono::{DateTime, Utc};
use engine_diag_core::EngineInfo;
use serde::Serialize;
use utoipa::ToSchema;

// === HTTP DTOs ===

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(value_type = String, example = "healthy")]
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy",
            timestamp: Utc::now(),
        }
    }
}

/// Uniform body for every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorEnvelope {
    pub error: String,
    pub timestamp: DateTime<Utc>,
    pub path: String,
}

/// Multipart form accepted by the indicator diagram endpoint.
///
/// Documents the request shape only; the handler reads the parts directly.
#[derive(ToSchema)]
pub struct AnalysisUpload {
    /// Indicator diagram image (PNG/JPEG).
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
    /// Engine metadata as a JSON document.
    pub engine_info: EngineInfo,
}
