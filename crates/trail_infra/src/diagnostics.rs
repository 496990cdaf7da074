use std::path::Path;

use trail_app::DiagnosticInfra;
use trail_domain::ToolName;

/// Reports failures through `tracing`, with the full error chain.
pub struct TrailDiagnostics;

impl DiagnosticInfra for TrailDiagnostics {
    fn report_failure(&self, tool: &ToolName, error: &anyhow::Error) {
        tracing::error!(tool_name = %tool, error = ?error, "Error executing tool");
    }

    fn report_commit_failure(&self, path: &Path, reason: &str) {
        tracing::warn!(path = %path.display(), reason, "Failed to commit changes");
    }
}
