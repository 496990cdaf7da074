use derive_more::From;
use schemars::Schema;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::{Chmod, Error, NamedTool, ToolCallFull, ToolName};

/// Enum representing every tool input this crate can execute.
///
/// Serialized the way tool calls arrive from the host:
/// `{"name": "<tool>", "arguments": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, From, EnumIter, Display)]
#[serde(tag = "name", content = "arguments", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ToolCatalog {
    Chmod(Chmod),
}

/// Advertised shape of a tool: what the host lists to the assistant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: ToolName,
    pub description: String,
    pub input_schema: Schema,
}

impl ToolCatalog {
    pub fn name(&self) -> ToolName {
        match self {
            ToolCatalog::Chmod(_) => Chmod::tool_name(),
        }
    }

    pub fn contains(tool_name: &ToolName) -> bool {
        ToolCatalog::iter().any(|tool| tool.name() == *tool_name)
    }

    pub fn definition(&self) -> ToolDefinition {
        match self {
            ToolCatalog::Chmod(_) => ToolDefinition {
                name: Chmod::tool_name(),
                description: Chmod::DESCRIPTION.trim().to_string(),
                input_schema: schemars::schema_for!(Chmod),
            },
        }
    }

    pub fn definitions() -> Vec<ToolDefinition> {
        ToolCatalog::iter().map(|tool| tool.definition()).collect()
    }
}

impl TryFrom<ToolCallFull> for ToolCatalog {
    type Error = Error;

    fn try_from(value: ToolCallFull) -> Result<Self, Self::Error> {
        if !ToolCatalog::contains(&value.name) {
            return Err(Error::UnknownTool(value.name));
        }

        let call = serde_json::json!({
            "name": value.name.as_str(),
            "arguments": value.arguments,
        });
        serde_json::from_value(call)
            .map_err(|error| Error::ToolCallArgument { tool: value.name, error })
    }
}
