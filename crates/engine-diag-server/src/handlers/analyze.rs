//! Indicator diagram upload handler.

use std::sync::Arc;

use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use engine_diag_core::{AnalysisResult, DiagramImage, EngineInfo};

use crate::dto::{AnalysisUpload, ErrorEnvelope};
use crate::error::AppError;
use crate::services::analysis as analysis_service;
use crate::state::ServerState;

pub const FILE_FIELD: &str = "file";
pub const ENGINE_INFO_FIELD: &str = "engine_info";

/// Analyze engine indicator diagram
///
/// Analyzes a 2-stroke marine engine's indicator diagram for combustion
/// anomalies, ring wear patterns and injector issues. Expects a multipart form
/// with a `file` part (PNG/JPEG diagram) and an `engine_info` part holding the
/// engine metadata as JSON.
#[utoipa::path(
    post,
    path = "/api/analyze/indicator-diagram",
    tag = "Analysis",
    request_body(content = AnalysisUpload, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Diagnostic verdict", body = AnalysisResult),
        (status = 400, description = "Upload is not an image", body = ErrorEnvelope),
        (status = 413, description = "Upload exceeds the size limit", body = ErrorEnvelope),
        (status = 422, description = "Malformed multipart form", body = ErrorEnvelope),
        (status = 500, description = "Analysis failed", body = ErrorEnvelope)
    )
)]
pub async fn indicator_diagram(
    State(state): State<Arc<ServerState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalysisResult>, AppError> {
    let multipart = multipart.map_err(|e| AppError::Unprocessable(e.body_text()))?;
    let (image, engine_info) = read_upload(multipart).await?;

    let result = analysis_service::analyze_diagram(&state, &image, &engine_info).await?;
    Ok(Json(result))
}

async fn read_upload(mut multipart: Multipart) -> Result<(DiagramImage, EngineInfo), AppError> {
    let mut image = None;
    let mut engine_info = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(FILE_FIELD) => {
                let content_type = field.content_type().map(str::to_string);
                let file_name = field.file_name().map(str::to_string);
                let bytes = field.bytes().await.map_err(multipart_error)?;
                image = Some(DiagramImage::new(content_type, file_name, bytes.to_vec()));
            }
            Some(ENGINE_INFO_FIELD) => {
                let raw = field.text().await.map_err(multipart_error)?;
                let parsed: EngineInfo = serde_json::from_str(&raw).map_err(|e| {
                    AppError::Unprocessable(format!("Invalid {}: {}", ENGINE_INFO_FIELD, e))
                })?;
                engine_info = Some(parsed);
            }
            // Unknown parts are drained by the next call to next_field.
            _ => {}
        }
    }

    let image = image.ok_or_else(|| missing_field(FILE_FIELD))?;
    let engine_info = engine_info.ok_or_else(|| missing_field(ENGINE_INFO_FIELD))?;
    Ok((image, engine_info))
}

fn missing_field(name: &str) -> AppError {
    AppError::Unprocessable(format!("Missing form field: {}", name))
}

fn multipart_error(e: MultipartError) -> AppError {
    match e.status() {
        StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(e.body_text()),
        _ => AppError::Unprocessable(e.body_text()),
    }
}
