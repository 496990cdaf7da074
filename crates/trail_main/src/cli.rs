//! NOTE: Always use singular names for commands and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "trail", version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Working directory to run tools from.
    ///
    /// Relative tool paths are resolved against it. Defaults to the current
    /// directory.
    #[arg(long, short = 'C', global = true)]
    pub directory: Option<PathBuf>,

    /// Also write logs to stderr.
    #[arg(long, default_value_t = false, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: TopLevelCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum TopLevelCommand {
    /// Print every available tool with its input schema.
    Tools,

    /// Add or remove the executable permission of a file and commit it.
    Chmod {
        /// File to change, absolute or relative to the working directory.
        path: String,

        /// Either `a+x` or `a-x`.
        #[arg(allow_hyphen_values = true)]
        mode: String,

        /// Conversation id recorded in the commit.
        #[arg(long)]
        session_id: Option<String>,
    },

    /// Run a raw tool call given as JSON, e.g.
    /// `{"name": "chmod", "arguments": {"path": "run.sh", "mode": "a+x"}}`.
    Call {
        json: String,

        /// Conversation id recorded in the commit.
        #[arg(long)]
        session_id: Option<String>,
    },
}
