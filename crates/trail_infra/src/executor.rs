use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, bail};
use tokio::process::Command;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use trail_app::CommandInfra;
use trail_domain::{CommandOutput, Environment};

/// Service for executing external commands
#[derive(Clone, Debug)]
pub struct TrailCommandExecutor {
    env: Environment,

    // Mutex to ensure that only one command is executed at a time
    ready: Arc<Mutex<()>>,
}

impl TrailCommandExecutor {
    pub fn new(env: Environment) -> Self {
        Self { env, ready: Arc::new(Mutex::new(())) }
    }

    /// `None` when `tool_timeout` is zero, which disables the limit.
    fn timeout(&self) -> Option<Duration> {
        (self.env.tool_timeout > 0).then(|| Duration::from_secs(self.env.tool_timeout))
    }

    fn prepare_command(
        &self,
        command: &[String],
        working_dir: &Path,
        env_vars: &[(String, String)],
    ) -> anyhow::Result<Command> {
        let (program, args) = command.split_first().context("Command must not be empty")?;

        let mut prepared = Command::new(program);
        prepared.args(args);

        tracing::info!(
            command = %command.join(" "),
            working_dir = %working_dir.display(),
            "Executing command"
        );

        prepared.kill_on_drop(true);
        prepared.current_dir(working_dir);
        prepared
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        for (key, value) in env_vars {
            prepared.env(key, value);
        }

        Ok(prepared)
    }

    /// Runs `command` to completion, killing it when `cancel` fires or the
    /// configured timeout elapses.
    pub async fn execute(
        &self,
        command: Vec<String>,
        working_dir: &Path,
        env_vars: &[(String, String)],
        cancel: Option<CancellationToken>,
    ) -> anyhow::Result<CommandOutput> {
        let rendered = command.join(" ");
        let mut prepared = self.prepare_command(&command, working_dir, env_vars)?;

        // A call cancelled while queued behind another command gives up here.
        let ready = tokio::select! {
            ready = self.ready.lock() => ready,
            _ = cancelled(cancel.as_ref()) => {
                tracing::warn!(command = %rendered, "Command cancelled before it started");
                bail!("Command '{rendered}' was cancelled")
            }
        };

        let child = prepared
            .spawn()
            .with_context(|| format!("Failed to start '{rendered}'"))?;

        // Dropping this future drops the child, and `kill_on_drop` terminates it.
        let wait = child.wait_with_output();
        let bounded = async {
            match self.timeout() {
                Some(limit) => tokio::time::timeout(limit, wait).await.ok(),
                None => Some(wait.await),
            }
        };

        let output = tokio::select! {
            output = bounded => match output {
                Some(output) => output.with_context(|| format!("Failed to wait for '{rendered}'"))?,
                None => bail!(
                    "Command '{rendered}' timed out after {}s",
                    self.env.tool_timeout
                ),
            },
            _ = cancelled(cancel.as_ref()) => {
                tracing::warn!(command = %rendered, "Command cancelled");
                bail!("Command '{rendered}' was cancelled")
            }
        };

        drop(ready);

        Ok(CommandOutput {
            command: rendered,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        })
    }
}

/// Resolves when the token fires; never resolves without one.
async fn cancelled(token: Option<&CancellationToken>) {
    match token {
        Some(token) => token.cancelled().await,
        None => std::future::pending().await,
    }
}

#[async_trait::async_trait]
impl CommandInfra for TrailCommandExecutor {
    async fn execute_command(
        &self,
        command: Vec<String>,
        working_dir: PathBuf,
        cancel: Option<CancellationToken>,
    ) -> anyhow::Result<CommandOutput> {
        self.execute(command, &working_dir, &[], cancel).await
    }
}
