use std::path::{Path, PathBuf};

use anyhow::Result;
use tokio_util::sync::CancellationToken;
use trail_domain::{CommandOutput, Environment, ToolName};

pub trait EnvironmentInfra: Send + Sync {
    fn get_environment(&self) -> Environment;
}

/// Read-only access to file metadata.
#[async_trait::async_trait]
pub trait FileInfoInfra: Send + Sync {
    async fn exists(&self, path: &Path) -> Result<bool>;

    /// Whether the owner execute bit is set on the file.
    async fn is_executable(&self, path: &Path) -> Result<bool>;
}

/// Service for executing external commands
#[async_trait::async_trait]
pub trait CommandInfra: Send + Sync {
    /// Runs `command[0]` with the remaining elements as arguments inside
    /// `working_dir` and captures its output. A non-zero exit is not an
    /// error here; callers inspect [`CommandOutput::success`].
    ///
    /// When `cancel` fires the process is terminated and an error is
    /// returned.
    async fn execute_command(
        &self,
        command: Vec<String>,
        working_dir: PathBuf,
        cancel: Option<CancellationToken>,
    ) -> Result<CommandOutput>;
}

/// Result of a commit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitResult {
    /// Whether the repository now records the change
    pub committed: bool,
    /// Output from git on success, or the reason the commit did not happen
    pub message: String,
}

impl CommitResult {
    pub fn committed(message: impl Into<String>) -> Self {
        Self { committed: true, message: message.into() }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self { committed: false, message: message.into() }
    }
}

/// Version control collaborator.
#[async_trait::async_trait]
pub trait VcsInfra: Send + Sync {
    /// Commits every pending change under `directory`.
    ///
    /// A commit that could not be made (not a repository, lock contention,
    /// hook rejection) is reported through [`CommitResult::committed`]; `Err`
    /// is reserved for failures to run the version control tool at all.
    async fn commit(
        &self,
        directory: &Path,
        description: &str,
        session_id: Option<&str>,
    ) -> Result<CommitResult>;
}

/// Sink for failures that operators need to see, independent of what is
/// returned to the caller.
pub trait DiagnosticInfra: Send + Sync {
    fn report_failure(&self, tool: &ToolName, error: &anyhow::Error);
    fn report_commit_failure(&self, path: &Path, reason: &str);
}
