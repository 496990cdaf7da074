use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio_util::sync::CancellationToken;
use trail_api::{API, TrailAPI};
use trail_main::{Cli, init_tracing, run};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd: PathBuf = match &cli.directory {
        Some(directory) => directory
            .canonicalize()
            .with_context(|| format!("Invalid path: {}", directory.display()))?,
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };

    let api = TrailAPI::init(cwd);
    let _guard = init_tracing(&api.environment().log_path(), cli.verbose)?;

    // Ctrl-C aborts the in-flight tool call instead of killing the process.
    let cancel = CancellationToken::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Interrupted, cancelling tool call");
                cancel.cancel();
            }
        }
    });

    let output = run(&api, cli.command, cancel).await?;
    println!("{output}");
    Ok(())
}
