//! The analysis capability and its fixed-output implementation.

use async_trait::async_trait;

use crate::{AnalysisError, AnalysisResult, Confidence, DiagnosticStatus, DiagramImage, EngineInfo};

/// Produces a diagnostic verdict from an indicator diagram.
///
/// Implementations may await I/O (model inference, object storage) freely;
/// the server holds them as `Arc<dyn Analyzer>` and calls them concurrently.
#[async_trait]
pub trait Analyzer: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    async fn analyze(
        &self,
        image: &DiagramImage,
        engine_info: &EngineInfo,
    ) -> Result<AnalysisResult, AnalysisError>;
}

/// Analyzer that ignores the diagram and always reports piston ring wear.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockAnalyzer;

impl MockAnalyzer {
    const CONFIDENCE: f64 = 0.92;

    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Analyzer for MockAnalyzer {
    fn name(&self) -> &str {
        "mock"
    }

    async fn analyze(
        &self,
        _image: &DiagramImage,
        engine_info: &EngineInfo,
    ) -> Result<AnalysisResult, AnalysisError> {
        Ok(AnalysisResult::new(engine_info.clone())
            .with_status(DiagnosticStatus::Warning)
            .with_anomaly("ring_wear")
            .with_confidence(Confidence::new(Self::CONFIDENCE)?)
            .with_action("Check piston ring clearance")
            .with_action("Inspect cylinder liner"))
    }
}
