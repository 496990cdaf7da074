use std::time::Duration;

use serde::{Deserialize, Serialize};

/// The uniform result envelope every tool returns, on success and on
/// failure alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolOutput {
    /// Human readable outcome of the call.
    pub output: String,
    /// Wall-clock time from receipt of the call until the result was built.
    pub duration_ms: u64,
    /// What the assistant sees; always derived from `output`.
    pub assistant_rendering: String,
}

impl ToolOutput {
    pub fn new(output: impl Into<String>, elapsed: Duration) -> Self {
        let mut result = Self {
            output: output.into(),
            duration_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            assistant_rendering: String::new(),
        };
        result.assistant_rendering = render_for_assistant(&result);
        result
    }
}

/// Renders a result for consumption by the assistant. Currently the output
/// text as is.
pub fn render_for_assistant(output: &ToolOutput) -> String {
    output.output.clone()
}
