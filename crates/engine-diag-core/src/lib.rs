//! Core domain types and the analyzer abstraction for engine diagnostics.
//!
//! This crate provides the types shared between the analysis backends and the
//! HTTP server:
//!
//! - [`EngineInfo`] — metadata identifying the engine under analysis
//! - [`AnalysisResult`] and [`DiagnosticStatus`] — the diagnostic verdict
//! - [`Analyzer`] — the async capability that turns a diagram into a result
//! - [`MockAnalyzer`] — fixed-output analyzer used until a model is wired in
//!
//! # Example
//!
//! ```rust
//! use engine_diag_core::EngineInfo;
//!
//! let info: EngineInfo = serde_json::from_str(r#"{"engine_id": "E1"}"#).unwrap();
//! assert_eq!(info.engine_type, "2T");
//! assert!(info.vessel_id.is_none());
//! ```

mod analyzer;

pub use analyzer::{Analyzer, MockAnalyzer};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

// ─────────────────────────────────────────────────────────────────────────────
// Error
// ─────────────────────────────────────────────────────────────────────────────

/// Errors raised by an [`Analyzer`] while producing a result.
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The model or backing service failed.
    #[error("inference failed: {0}")]
    Inference(String),

    /// The uploaded image could not be used.
    #[error("unreadable image: {0}")]
    Image(String),

    /// A confidence score fell outside `[0, 1]`.
    #[error("confidence {0} is outside [0, 1]")]
    InvalidConfidence(f64),
}

// ─────────────────────────────────────────────────────────────────────────────
// Engine metadata
// ─────────────────────────────────────────────────────────────────────────────

/// Engine type assumed when the client does not send one.
pub const DEFAULT_ENGINE_TYPE: &str = "2T";

/// Identifies the engine an indicator diagram was taken from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EngineInfo {
    pub engine_id: String,
    #[serde(default)]
    pub vessel_id: Option<String>,
    #[serde(default = "default_engine_type")]
    #[schema(default = "2T")]
    pub engine_type: String,
    #[serde(default)]
    pub manufacturer: Option<String>,
}

fn default_engine_type() -> String {
    DEFAULT_ENGINE_TYPE.to_string()
}

impl EngineInfo {
    /// Creates engine metadata with only the identifier set.
    pub fn new(engine_id: impl Into<String>) -> Self {
        Self {
            engine_id: engine_id.into(),
            vessel_id: None,
            engine_type: default_engine_type(),
            manufacturer: None,
        }
    }

    pub fn with_vessel(mut self, vessel_id: impl Into<String>) -> Self {
        self.vessel_id = Some(vessel_id.into());
        self
    }

    pub fn with_engine_type(mut self, engine_type: impl Into<String>) -> Self {
        self.engine_type = engine_type.into();
        self
    }

    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = Some(manufacturer.into());
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Uploaded diagram
// ─────────────────────────────────────────────────────────────────────────────

/// An uploaded indicator diagram as handed to an [`Analyzer`].
#[derive(Debug, Clone, Default)]
pub struct DiagramImage {
    /// Media type declared by the client, if any.
    pub content_type: Option<String>,
    /// Original file name, if the client sent one.
    pub file_name: Option<String>,
    pub bytes: Vec<u8>,
}

impl DiagramImage {
    pub fn new(content_type: Option<String>, file_name: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            content_type,
            file_name,
            bytes,
        }
    }

    /// Returns true when the declared media type is an `image/*` type.
    pub fn is_image(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.starts_with("image/"))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Analysis result
// ─────────────────────────────────────────────────────────────────────────────

/// Severity of an analysis verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticStatus {
    Normal,
    Warning,
    Critical,
}

impl DiagnosticStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticStatus::Normal => "normal",
            DiagnosticStatus::Warning => "warning",
            DiagnosticStatus::Critical => "critical",
        }
    }
}

impl std::fmt::Display for DiagnosticStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Confidence score, guaranteed to lie in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Confidence(f64);

impl Confidence {
    pub fn new(value: f64) -> Result<Self, AnalysisError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(AnalysisError::InvalidConfidence(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Confidence {
    type Error = AnalysisError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Confidence> for f64 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}

/// Diagnostic verdict for one uploaded indicator diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResult {
    pub analysis_id: String,
    pub timestamp: DateTime<Utc>,
    pub engine_info: EngineInfo,
    pub status: DiagnosticStatus,
    pub detected_anomalies: Vec<String>,
    #[schema(value_type = f64, minimum = 0.0, maximum = 1.0)]
    pub confidence: Confidence,
    pub recommended_actions: Vec<String>,
}

impl AnalysisResult {
    /// Starts a result for `engine_info` with a fresh id and the current time.
    ///
    /// The verdict defaults to `normal` with no anomalies and full confidence
    /// until the analyzer fills it in.
    pub fn new(engine_info: EngineInfo) -> Self {
        Self {
            analysis_id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            engine_info,
            status: DiagnosticStatus::Normal,
            detected_anomalies: Vec::new(),
            confidence: Confidence(1.0),
            recommended_actions: Vec::new(),
        }
    }

    pub fn with_status(mut self, status: DiagnosticStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_anomaly(mut self, tag: impl Into<String>) -> Self {
        self.detected_anomalies.push(tag.into());
        self
    }

    pub fn with_confidence(mut self, confidence: Confidence) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.recommended_actions.push(action.into());
        self
    }
}
