//! OpenAPI document for the diagnostic API.

use axum::Json;
use engine_diag_config::{
    SERVICE_CONTACT_EMAIL, SERVICE_CONTACT_NAME, SERVICE_DESCRIPTION, SERVICE_LICENSE,
    SERVICE_NAME, SERVICE_VERSION,
};
use engine_diag_core::{AnalysisResult, DiagnosticStatus, EngineInfo};
use utoipa::openapi::info::{ContactBuilder, InfoBuilder, License};
use utoipa::OpenApi;

use crate::dto::{AnalysisUpload, ErrorEnvelope, HealthResponse};
use crate::handlers;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::analyze::indicator_diagram, handlers::health),
    components(schemas(
        EngineInfo,
        AnalysisResult,
        DiagnosticStatus,
        AnalysisUpload,
        HealthResponse,
        ErrorEnvelope
    )),
    tags(
        (name = "Analysis", description = "Indicator diagram diagnostics"),
        (name = "System", description = "Service status")
    )
)]
pub struct ApiDoc;

/// Builds the OpenAPI document with the service metadata filled in.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info = InfoBuilder::new()
        .title(SERVICE_NAME)
        .version(SERVICE_VERSION)
        .description(Some(SERVICE_DESCRIPTION))
        .contact(Some(
            ContactBuilder::new()
                .name(Some(SERVICE_CONTACT_NAME))
                .email(Some(SERVICE_CONTACT_EMAIL))
                .build(),
        ))
        .license(Some(License::new(SERVICE_LICENSE)))
        .build();
    doc
}

/// GET /openapi.json - Serves the OpenAPI document.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(api_doc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_doc_metadata() {
        let doc = api_doc();
        assert_eq!(doc.info.title, SERVICE_NAME);
        assert_eq!(doc.info.version, SERVICE_VERSION);
        assert_eq!(doc.info.license.unwrap().name, "MIT");
        assert!(doc.paths.paths.contains_key("/api/health"));
        assert!(doc.paths.paths.contains_key("/api/analyze/indicator-diagram"));
    }
}
