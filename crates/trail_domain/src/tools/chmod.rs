use std::path::Path;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::{Error, NamedTool, ToolName};

/// Input of the chmod tool.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Chmod {
    /// The path of the file to modify. Relative paths are resolved against
    /// the working directory.
    pub path: String,

    /// The mode to apply: "a+x" makes the file executable, "a-x" removes the
    /// executable permission. No other mode is accepted.
    pub mode: String,
}

impl Chmod {
    pub const TOOL_NAME: &'static str = "chmod";
    pub const DESCRIPTION: &'static str = include_str!("descriptions/chmod.md");

    pub fn new(path: impl Into<String>, mode: impl Into<String>) -> Self {
        Self { path: path.into(), mode: mode.into() }
    }
}

impl NamedTool for Chmod {
    fn tool_name() -> ToolName {
        ToolName::new(Chmod::TOOL_NAME)
    }
}

/// The two permission changes the chmod tool performs.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
pub enum ChmodMode {
    #[serde(rename = "a+x")]
    #[strum(serialize = "a+x")]
    AddExecute,
    #[serde(rename = "a-x")]
    #[strum(serialize = "a-x")]
    RemoveExecute,
}

impl ChmodMode {
    /// Parses a caller supplied mode. The error names the rejected value and
    /// every supported one.
    pub fn parse(mode: &str) -> Result<Self, Error> {
        ChmodMode::from_str(mode).map_err(|_| {
            let supported = ChmodMode::iter()
                .map(|mode| format!("'{mode}'"))
                .collect::<Vec<_>>()
                .join(" and ");
            Error::invalid_argument(format!(
                "Unsupported chmod mode: {mode}. Only {supported} are supported."
            ))
        })
    }

    /// Whether a file whose owner execute bit is `executable` already has
    /// the permission this mode asks for.
    pub fn is_satisfied_by(self, executable: bool) -> bool {
        match self {
            ChmodMode::AddExecute => executable,
            ChmodMode::RemoveExecute => !executable,
        }
    }

    pub fn already_satisfied_message(self, path: &str) -> String {
        match self {
            ChmodMode::AddExecute => format!("File '{path}' is already executable"),
            ChmodMode::RemoveExecute => format!("File '{path}' is already non-executable"),
        }
    }

    /// Past tense, user facing description of the change.
    pub fn action_message(self, path: &str) -> String {
        match self {
            ChmodMode::AddExecute => format!("Made file '{path}' executable"),
            ChmodMode::RemoveExecute => {
                format!("Removed executable permission from file '{path}'")
            }
        }
    }

    /// Commit description, named after the file rather than the full path.
    pub fn commit_description(self, path: &Path) -> String {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        match self {
            ChmodMode::AddExecute => format!("Make '{name}' executable"),
            ChmodMode::RemoveExecute => format!("Remove executable permission from '{name}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_supported_modes() {
        assert_eq!(ChmodMode::parse("a+x").unwrap(), ChmodMode::AddExecute);
        assert_eq!(ChmodMode::parse("a-x").unwrap(), ChmodMode::RemoveExecute);
    }

    #[test]
    fn test_parse_unsupported_mode_names_value_and_options() {
        let actual = ChmodMode::parse("755").unwrap_err().to_string();
        let expected = "Unsupported chmod mode: 755. Only 'a+x' and 'a-x' are supported.";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(ChmodMode::parse("A+X").is_err());
        assert!(ChmodMode::parse("").is_err());
    }

    #[test]
    fn test_is_satisfied_by() {
        assert!(ChmodMode::AddExecute.is_satisfied_by(true));
        assert!(!ChmodMode::AddExecute.is_satisfied_by(false));
        assert!(ChmodMode::RemoveExecute.is_satisfied_by(false));
        assert!(!ChmodMode::RemoveExecute.is_satisfied_by(true));
    }

    #[test]
    fn test_commit_description_uses_file_name() {
        let fixture = PathBuf::from("/repo/bin/deploy.sh");
        assert_eq!(
            ChmodMode::AddExecute.commit_description(&fixture),
            "Make 'deploy.sh' executable"
        );
        assert_eq!(
            ChmodMode::RemoveExecute.commit_description(&fixture),
            "Remove executable permission from 'deploy.sh'"
        );
    }

    #[test]
    fn test_messages_use_path_as_given() {
        assert_eq!(
            ChmodMode::AddExecute.action_message("bin/deploy.sh"),
            "Made file 'bin/deploy.sh' executable"
        );
        assert_eq!(
            ChmodMode::RemoveExecute.already_satisfied_message("bin/deploy.sh"),
            "File 'bin/deploy.sh' is already non-executable"
        );
    }

    #[test]
    fn test_mode_serde_uses_chmod_notation() {
        let actual = serde_json::to_string(&ChmodMode::RemoveExecute).unwrap();
        assert_eq!(actual, r#""a-x""#);
        assert_eq!(ChmodMode::AddExecute.to_string(), "a+x");
    }
}
