use std::sync::Arc;

use trail_domain::{ToolCallContext, ToolCallFull, ToolCatalog, ToolDefinition, ToolOutput};

use crate::tool_executor::ToolExecutor;
use crate::{ChmodService, DiagnosticInfra};

/// Entry point of the tool layer for the host: advertises the catalog and
/// dispatches calls.
pub struct ToolRegistry<S> {
    tool_executor: ToolExecutor<S>,
}

impl<S: ChmodService + DiagnosticInfra> ToolRegistry<S> {
    pub fn new(services: Arc<S>) -> Self {
        Self { tool_executor: ToolExecutor::new(services) }
    }

    pub async fn call(&self, call: ToolCallFull, context: &ToolCallContext) -> ToolOutput {
        tracing::info!(
            tool_name = %call.name,
            call_id = ?call.call_id,
            session_id = ?context.session_id,
            arguments = %call.arguments,
            "Executing tool call"
        );
        let tool_name = call.name.clone();
        let output = self.tool_executor.execute(call, context).await;
        tracing::debug!(tool_name = %tool_name, duration_ms = output.duration_ms, "Tool call finished");
        output
    }

    pub fn list(&self) -> Vec<ToolDefinition> {
        ToolCatalog::definitions()
    }
}
