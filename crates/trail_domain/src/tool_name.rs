use std::fmt::Display;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ToolName(String);

impl ToolName {
    pub fn new(value: impl ToString) -> Self {
        ToolName(value.to_string())
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ToolName {
    fn from(value: String) -> Self {
        ToolName::new(value)
    }
}

impl From<&str> for ToolName {
    fn from(value: &str) -> Self {
        ToolName::new(value)
    }
}

/// Implemented by every tool input so its catalog name is a static,
/// queryable value.
pub trait NamedTool {
    fn tool_name() -> ToolName;
}

impl Display for ToolName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_tool_name_serializes_as_plain_string() {
        let fixture = ToolName::new("chmod");
        let actual = serde_json::to_string(&fixture).unwrap();
        let expected = r#""chmod""#;
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_tool_name_display() {
        let fixture = ToolName::from("chmod".to_string());
        assert_eq!(fixture.to_string(), "chmod");
        assert_eq!(fixture.into_string(), "chmod");
    }
}
