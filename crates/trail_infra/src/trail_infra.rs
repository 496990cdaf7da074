use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use trail_app::{
    CommandInfra, CommitResult, DiagnosticInfra, EnvironmentInfra, FileInfoInfra, VcsInfra,
};
use trail_domain::{CommandOutput, Environment, ToolName};

use crate::diagnostics::TrailDiagnostics;
use crate::env::TrailEnvironmentInfra;
use crate::executor::TrailCommandExecutor;
use crate::fs_meta::TrailFileMeta;
use crate::git::TrailGitCommitter;

#[derive(Clone)]
pub struct TrailInfra {
    environment: Arc<TrailEnvironmentInfra>,
    file_meta: Arc<TrailFileMeta>,
    command_executor: Arc<TrailCommandExecutor>,
    git: Arc<TrailGitCommitter>,
    diagnostics: Arc<TrailDiagnostics>,
}

impl TrailInfra {
    pub fn new(cwd: PathBuf) -> Self {
        let environment = Arc::new(TrailEnvironmentInfra::new(cwd));
        let env = environment.get_environment();
        let command_executor = Arc::new(TrailCommandExecutor::new(env.clone()));

        Self {
            environment,
            file_meta: Arc::new(TrailFileMeta),
            git: Arc::new(TrailGitCommitter::new(env, command_executor.clone())),
            command_executor,
            diagnostics: Arc::new(TrailDiagnostics),
        }
    }
}

impl EnvironmentInfra for TrailInfra {
    fn get_environment(&self) -> Environment {
        self.environment.get_environment()
    }
}

#[async_trait::async_trait]
impl FileInfoInfra for TrailInfra {
    async fn exists(&self, path: &Path) -> anyhow::Result<bool> {
        self.file_meta.exists(path).await
    }

    async fn is_executable(&self, path: &Path) -> anyhow::Result<bool> {
        self.file_meta.is_executable(path).await
    }
}

#[async_trait::async_trait]
impl CommandInfra for TrailInfra {
    async fn execute_command(
        &self,
        command: Vec<String>,
        working_dir: PathBuf,
        cancel: Option<CancellationToken>,
    ) -> anyhow::Result<CommandOutput> {
        self.command_executor
            .execute_command(command, working_dir, cancel)
            .await
    }
}

#[async_trait::async_trait]
impl VcsInfra for TrailInfra {
    async fn commit(
        &self,
        directory: &Path,
        description: &str,
        session_id: Option<&str>,
    ) -> anyhow::Result<CommitResult> {
        self.git.commit(directory, description, session_id).await
    }
}

impl DiagnosticInfra for TrailInfra {
    fn report_failure(&self, tool: &ToolName, error: &anyhow::Error) {
        self.diagnostics.report_failure(tool, error)
    }

    fn report_commit_failure(&self, path: &Path, reason: &str) {
        self.diagnostics.report_commit_failure(path, reason)
    }
}
