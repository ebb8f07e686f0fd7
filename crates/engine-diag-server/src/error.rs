//! Application error types, Axum response conversion and the error envelope.

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{error, warn};

use crate::dto::ErrorEnvelope;

/// Application-level errors with HTTP status code mapping.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(String),
    PayloadTooLarge(String),
    Unprocessable(String),
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::BadRequest(m)
            | AppError::NotFound(m)
            | AppError::PayloadTooLarge(m)
            | AppError::Unprocessable(m)
            | AppError::Internal(m) => m,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.status().as_u16(), self.message())
    }
}

impl From<engine_diag_core::AnalysisError> for AppError {
    fn from(e: engine_diag_core::AnalysisError) -> Self {
        AppError::Internal(format!("Analysis failed: {}", e))
    }
}

/// Error message attached to a response so [`error_envelope`] can render it
/// together with the request path.
#[derive(Debug, Clone)]
pub struct ErrorMessage(pub String);

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message().to_string();
        let mut response = (status, Json(ErrorBody { error: &message })).into_response();
        response.extensions_mut().insert(ErrorMessage(message));
        response
    }
}

/// Renders every 4xx/5xx response as `{error, timestamp, path}`.
///
/// Responses built from [`AppError`] keep their message; anything else
/// (unknown route, wrong method, body limit) uses the status reason phrase.
pub async fn error_envelope(req: Request, next: Next) -> Response {
    let path = req.uri().path().to_owned();
    let response = next.run(req).await;

    let status = response.status();
    if !status.is_client_error() && !status.is_server_error() {
        return response;
    }

    let message = match response.extensions().get::<ErrorMessage>() {
        Some(ErrorMessage(m)) => m.clone(),
        None => status.canonical_reason().unwrap_or("Error").to_string(),
    };

    if status.is_server_error() {
        error!(status = status.as_u16(), path = %path, "{}", message);
    } else {
        warn!(status = status.as_u16(), path = %path, "{}", message);
    }

    let envelope = ErrorEnvelope {
        error: message,
        timestamp: Utc::now(),
        path,
    };
    (status, Json(envelope)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::BadRequest("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::Unprocessable("x".into()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::Internal("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_analysis_error_becomes_internal() {
        let err: AppError =
            engine_diag_core::AnalysisError::Inference("model offline".into()).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Analysis failed: inference failed: model offline");
    }

    #[test]
    fn test_into_response_carries_message() {
        let response = AppError::BadRequest("nope".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let ErrorMessage(message) = response.extensions().get::<ErrorMessage>().unwrap();
        assert_eq!(message, "nope");
    }
}
