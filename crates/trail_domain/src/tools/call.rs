use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::ToolName;

/// Unique identifier for a single use of a tool
#[derive(Clone, Debug, Deserialize, Hash, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ToolCallId(String);

impl ToolCallId {
    pub fn new(value: impl ToString) -> Self {
        ToolCallId(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ToolCallId {
    fn from(value: &str) -> Self {
        ToolCallId::new(value)
    }
}

/// A complete tool invocation as handed over by the host.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, Setters)]
#[setters(strip_option, into)]
#[serde(rename_all = "snake_case")]
pub struct ToolCallFull {
    pub name: ToolName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_id: Option<ToolCallId>,
    #[serde(default)]
    pub arguments: serde_json::Value,
}

impl ToolCallFull {
    pub fn new(tool_name: impl Into<ToolName>) -> Self {
        Self {
            name: tool_name.into(),
            call_id: None,
            arguments: serde_json::Value::Object(Default::default()),
        }
    }
}

/// Per-call context: who is calling and how to abort the call.
#[derive(Debug, Clone, Default, Setters)]
#[setters(strip_option, into)]
pub struct ToolCallContext {
    /// Opaque id of the conversation this call belongs to. Forwarded to the
    /// commit so the change can be traced back to it.
    pub session_id: Option<String>,
    pub cancel: Option<CancellationToken>,
}
