use std::path::PathBuf;

use trail_domain::{ChmodMode, ToolCallContext};

/// What the chmod service did to the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChmodOutcome {
    /// The file already had the requested permission; nothing was run or
    /// committed.
    AlreadySatisfied,
    Committed,
    /// The permission was changed but the commit did not happen.
    CommitFailed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChmodOutput {
    /// Absolute, normalized path of the file.
    pub path: PathBuf,
    pub mode: ChmodMode,
    pub outcome: ChmodOutcome,
}

#[async_trait::async_trait]
pub trait ChmodService: Send + Sync {
    /// Toggles the executable permission of `path` and commits the change.
    async fn chmod(
        &self,
        path: String,
        mode: String,
        context: &ToolCallContext,
    ) -> anyhow::Result<ChmodOutput>;
}
