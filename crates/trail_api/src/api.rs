use trail_domain::{Environment, ToolCallContext, ToolCallFull, ToolDefinition, ToolOutput};

/// The surface the host framework talks to.
#[async_trait::async_trait]
pub trait API: Sync + Send {
    /// Lists every tool with its description and input schema.
    fn tools(&self) -> Vec<ToolDefinition>;

    /// Runs a raw tool call. Always produces a result; failures are
    /// described in its `output`.
    async fn call(&self, call: ToolCallFull, context: ToolCallContext) -> ToolOutput;

    /// Toggles the executable permission of `path` and commits the change.
    async fn chmod(&self, path: String, mode: String, context: ToolCallContext) -> ToolOutput;

    /// The environment tools run in.
    fn environment(&self) -> Environment;
}
