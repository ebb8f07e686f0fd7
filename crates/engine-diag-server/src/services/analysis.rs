//! Indicator diagram analysis service.

use engine_diag_core::{AnalysisResult, DiagramImage, EngineInfo};
use tracing::{error, info};

use crate::error::AppError;
use crate::state::ServerState;

pub const ONLY_IMAGES: &str = "Only image files are supported";

/// Validates the upload and runs it through the configured analyzer.
pub async fn analyze_diagram(
    state: &ServerState,
    image: &DiagramImage,
    engine_info: &EngineInfo,
) -> Result<AnalysisResult, AppError> {
    if !image.is_image() {
        return Err(AppError::BadRequest(ONLY_IMAGES.into()));
    }

    info!(
        engine_id = %engine_info.engine_id,
        bytes = image.bytes.len(),
        "Received analysis request for engine {}",
        engine_info.engine_id
    );

    let result = state
        .analyzer
        .analyze(image, engine_info)
        .await
        .map_err(|e| {
            error!(engine_id = %engine_info.engine_id, "Analysis failed: {}", e);
            AppError::from(e)
        })?;

    info!(
        analysis_id = %result.analysis_id,
        "Analysis completed for {}. Status: {}",
        engine_info.engine_id,
        result.status
    );
    Ok(result)
}
