use std::path::Path;
use std::sync::Arc;

use trail_app::CommitResult;
use trail_domain::{CommandOutput, Environment};

use crate::executor::TrailCommandExecutor;

/// Commits pending changes with the `git` binary.
pub struct TrailGitCommitter {
    env: Environment,
    executor: Arc<TrailCommandExecutor>,
}

impl TrailGitCommitter {
    pub fn new(env: Environment, executor: Arc<TrailCommandExecutor>) -> Self {
        Self { env, executor }
    }

    /// The configured committer identity. The author stays whoever git is
    /// configured for.
    fn committer(&self) -> Vec<(String, String)> {
        let mut vars = Vec::new();
        if let Some(name) = &self.env.committer_name {
            vars.push(("GIT_COMMITTER_NAME".to_string(), name.clone()));
        }
        if let Some(email) = &self.env.committer_email {
            vars.push(("GIT_COMMITTER_EMAIL".to_string(), email.clone()));
        }
        vars
    }

    async fn git(&self, directory: &Path, args: &[&str]) -> anyhow::Result<CommandOutput> {
        let command = std::iter::once("git")
            .chain(args.iter().copied())
            .map(str::to_string)
            .collect();
        self.executor
            .execute(command, directory, &self.committer(), None)
            .await
    }

    /// Stages everything under `directory` and commits it.
    pub async fn commit(
        &self,
        directory: &Path,
        description: &str,
        session_id: Option<&str>,
    ) -> anyhow::Result<CommitResult> {
        let inside = self
            .git(directory, &["rev-parse", "--is-inside-work-tree"])
            .await?;
        if !inside.success() || inside.stdout.trim() != "true" {
            return Ok(CommitResult::failed(format!(
                "Not a Git repository: {}",
                directory.display()
            )));
        }

        let add = self.git(directory, &["add", "-A", "--", "."]).await?;
        if !add.success() {
            return Ok(CommitResult::failed(format!(
                "Failed to stage changes: {}",
                git_error(&add)
            )));
        }

        let staged = self.git(directory, &["diff", "--cached", "--quiet"]).await?;
        if staged.success() {
            return Ok(CommitResult::committed("No changes to commit"));
        }

        let message = commit_message(description, session_id);
        let commit = self.git(directory, &["commit", "-m", message.as_str()]).await?;
        if !commit.success() {
            return Ok(CommitResult::failed(git_error(&commit)));
        }

        tracing::info!(directory = %directory.display(), description, "Committed changes");
        Ok(CommitResult::committed(commit.stdout.trim()))
    }
}

fn commit_message(description: &str, session_id: Option<&str>) -> String {
    match session_id.map(str::trim) {
        Some(id) if !id.is_empty() => format!("{description}\n\nSession-Id: {id}"),
        _ => description.to_string(),
    }
}

// git prints some failures, like "nothing to commit", on stdout.
fn git_error(output: &CommandOutput) -> String {
    let stderr = output.stderr.trim();
    if stderr.is_empty() {
        output.stdout.trim().to_string()
    } else {
        stderr.to_string()
    }
}
