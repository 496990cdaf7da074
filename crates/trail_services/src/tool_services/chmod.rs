use std::path::Path;
use std::sync::Arc;

use trail_app::domain::{ChmodMode, Error, ToolCallContext};
use trail_app::{
    ChmodOutcome, ChmodOutput, ChmodService, CommandInfra, DiagnosticInfra, EnvironmentInfra,
    FileInfoInfra, VcsInfra,
};

use crate::utils::normalize_path;

/// Toggles the owner execute bit of a single file through the `chmod`
/// binary and records the change as a commit.
///
/// A file that already has the requested permission is left untouched: no
/// process is spawned and no commit is made, so repeating a call never
/// produces a second commit.
pub struct TrailChmod<F> {
    infra: Arc<F>,
}

impl<F> TrailChmod<F> {
    pub fn new(infra: Arc<F>) -> Self {
        Self { infra }
    }
}

#[async_trait::async_trait]
impl<F: EnvironmentInfra + FileInfoInfra + CommandInfra + VcsInfra + DiagnosticInfra> ChmodService
    for TrailChmod<F>
{
    async fn chmod(
        &self,
        input_path: String,
        mode: String,
        context: &ToolCallContext,
    ) -> anyhow::Result<ChmodOutput> {
        if input_path.is_empty() {
            return Err(Error::invalid_argument("File path must be provided").into());
        }
        let mode = ChmodMode::parse(&mode)?;

        let env = self.infra.get_environment();
        let path = normalize_path(&env.cwd, env.home.as_deref(), &input_path)?;
        if !self.infra.exists(&path).await? {
            return Err(Error::not_found(format!("The file does not exist: {input_path}")).into());
        }
        let directory = path
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| Error::invalid_argument(format!("Not a file: {input_path}")))?;

        if mode.is_satisfied_by(self.infra.is_executable(&path).await?) {
            tracing::debug!(path = %path.display(), %mode, "Permission already satisfied");
            return Ok(ChmodOutput { path, mode, outcome: ChmodOutcome::AlreadySatisfied });
        }

        let target = path.to_str().ok_or_else(|| {
            Error::invalid_argument(format!("Path is not valid UTF-8: {}", path.display()))
        })?;
        let command = vec!["chmod".to_string(), mode.to_string(), target.to_string()];
        let output = self
            .infra
            .execute_command(command, directory.clone(), context.cancel.clone())
            .await?;
        if !output.success() {
            return Err(Error::ExecutionFailure {
                command: output.command,
                exit_code: output.exit_code,
                stderr: output.stderr.trim().to_string(),
            }
            .into());
        }

        let description = mode.commit_description(&path);
        let commit = self
            .infra
            .commit(&directory, &description, context.session_id.as_deref())
            .await?;

        let outcome = if commit.committed {
            ChmodOutcome::Committed
        } else {
            self.infra.report_commit_failure(&path, &commit.message);
            ChmodOutcome::CommitFailed { reason: commit.message }
        };

        Ok(ChmodOutput { path, mode, outcome })
    }
}
