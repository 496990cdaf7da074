use thiserror::Error;

use crate::ToolName;

/// Failures a tool can classify. Anything that is not one of these reaches
/// the caller as an unexpected failure through `anyhow::Error`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Command '{command}' failed with exit code {}: {stderr}", exit_code_label(.exit_code))]
    ExecutionFailure {
        command: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("Tool '{0}' not found")]
    UnknownTool(ToolName),

    #[error("Invalid arguments for tool '{tool}': {error}")]
    ToolCallArgument {
        tool: ToolName,
        error: serde_json::Error,
    },
}

fn exit_code_label(code: &Option<i32>) -> String {
    code.map(|code| code.to_string())
        .unwrap_or_else(|| "none (terminated by signal)".to_string())
}

impl Error {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }
}

pub type Result<A> = std::result::Result<A, Error>;
