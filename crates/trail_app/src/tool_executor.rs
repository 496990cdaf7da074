use std::sync::Arc;
use std::time::Instant;

use trail_domain::{ToolCallContext, ToolCallFull, ToolCatalog, ToolName, ToolOutput};

use crate::operation::ToolOperation;
use crate::{ChmodService, DiagnosticInfra};

/// Runs tools and turns every outcome, including failures, into a
/// [`ToolOutput`]. Nothing past this point sees an error.
pub struct ToolExecutor<S> {
    services: Arc<S>,
}

impl<S: ChmodService + DiagnosticInfra> ToolExecutor<S> {
    pub fn new(services: Arc<S>) -> Self {
        Self { services }
    }

    async fn call_internal(
        &self,
        input: ToolCatalog,
        context: &ToolCallContext,
    ) -> anyhow::Result<ToolOperation> {
        Ok(match input {
            ToolCatalog::Chmod(input) => {
                let output = self
                    .services
                    .chmod(input.path.clone(), input.mode.clone(), context)
                    .await?;
                (input, output).into()
            }
        })
    }

    /// Parses and runs a raw tool call.
    pub async fn execute(&self, input: ToolCallFull, context: &ToolCallContext) -> ToolOutput {
        let started = Instant::now();
        let tool_name = input.name.clone();
        let operation = match ToolCatalog::try_from(input) {
            Ok(tool) => self.call_internal(tool, context).await,
            Err(error) => Err(error.into()),
        };
        self.finish(&tool_name, operation, started)
    }

    /// Runs an already parsed tool.
    pub async fn execute_tool(&self, input: ToolCatalog, context: &ToolCallContext) -> ToolOutput {
        let started = Instant::now();
        let tool_name = input.name();
        let operation = self.call_internal(input, context).await;
        self.finish(&tool_name, operation, started)
    }

    fn finish(
        &self,
        tool_name: &ToolName,
        operation: anyhow::Result<ToolOperation>,
        started: Instant,
    ) -> ToolOutput {
        match operation {
            Ok(operation) => operation.into_tool_output(started.elapsed()),
            Err(error) => {
                self.services.report_failure(tool_name, &error);
                ToolOutput::new(
                    format!("Error executing {tool_name}: {error}"),
                    started.elapsed(),
                )
            }
        }
    }
}
