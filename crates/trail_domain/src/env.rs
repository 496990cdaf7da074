use std::path::PathBuf;

use derive_setters::Setters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Setters, Clone, PartialEq, Serialize, Deserialize, fake::Dummy)]
#[serde(rename_all = "camelCase")]
#[setters(strip_option)]
/// Represents the environment in which the tools are running.
pub struct Environment {
    /// The working directory relative paths are resolved against.
    pub cwd: PathBuf,
    /// The home directory, used to expand a leading `~`.
    pub home: Option<PathBuf>,
    /// The base path relative to which logs and other state are stored.
    pub base_path: PathBuf,
    /// Maximum execution time in seconds for a single subprocess.
    /// Controlled by TRAIL_TOOL_TIMEOUT environment variable.
    pub tool_timeout: u64,
    /// Committer name recorded on automatic commits.
    /// Controlled by TRAIL_COMMITTER_NAME environment variable.
    pub committer_name: Option<String>,
    /// Committer email recorded on automatic commits.
    /// Controlled by TRAIL_COMMITTER_EMAIL environment variable.
    pub committer_email: Option<String>,
}

impl Environment {
    pub fn log_path(&self) -> PathBuf {
        self.base_path.join("logs")
    }
}
