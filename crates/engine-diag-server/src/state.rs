use std::sync::Arc;

use engine_diag_config::ServerConfig;
use engine_diag_core::{Analyzer, MockAnalyzer};
use tracing::info;

/// Read-only state shared by every request.
pub struct ServerState {
    pub analyzer: Arc<dyn Analyzer>,
    pub config: ServerConfig,
}

impl ServerState {
    pub fn new(analyzer: Arc<dyn Analyzer>, config: ServerConfig) -> Self {
        info!("Using {} analyzer", analyzer.name());
        Self { analyzer, config }
    }

    /// State backed by the fixed-output [`MockAnalyzer`].
    pub fn with_mock_analyzer(config: ServerConfig) -> Self {
        Self::new(Arc::new(MockAnalyzer::new()), config)
    }
}
