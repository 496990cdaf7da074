use std::path::Path;
use std::sync::Arc;

use trail_app::domain::{ToolCallContext, ToolName};
use trail_app::{
    ChmodOutput, ChmodService, CommandInfra, DiagnosticInfra, EnvironmentInfra, FileInfoInfra,
    VcsInfra,
};

use crate::tool_services::TrailChmod;

/// Container for every tool service, wired to a single infrastructure
/// implementation.
///
/// Type Parameters:
/// - F: The infrastructure implementation that provides the environment,
///   file metadata, subprocess execution, version control and diagnostics.
pub struct TrailServices<F> {
    infra: Arc<F>,
    chmod_service: Arc<TrailChmod<F>>,
}

impl<F> TrailServices<F> {
    pub fn new(infra: Arc<F>) -> Self {
        let chmod_service = Arc::new(TrailChmod::new(infra.clone()));
        Self { infra, chmod_service }
    }
}

#[async_trait::async_trait]
impl<F: EnvironmentInfra + FileInfoInfra + CommandInfra + VcsInfra + DiagnosticInfra> ChmodService
    for TrailServices<F>
{
    async fn chmod(
        &self,
        path: String,
        mode: String,
        context: &ToolCallContext,
    ) -> anyhow::Result<ChmodOutput> {
        self.chmod_service.chmod(path, mode, context).await
    }
}

impl<F: DiagnosticInfra> DiagnosticInfra for TrailServices<F> {
    fn report_failure(&self, tool: &ToolName, error: &anyhow::Error) {
        self.infra.report_failure(tool, error)
    }

    fn report_commit_failure(&self, path: &Path, reason: &str) {
        self.infra.report_commit_failure(path, reason)
    }
}
