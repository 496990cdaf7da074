use std::path::Path;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global subscriber: a daily rolling file under `log_dir`, and
/// stderr as well when `verbose` is set.
///
/// The filter comes from `TRAIL_LOG`, then `RUST_LOG`, then defaults to
/// `info`. Only the first call in a process takes effect. Keep the returned
/// guard alive until exit so buffered lines are flushed.
pub fn init_tracing(log_dir: &Path, verbose: bool) -> anyhow::Result<WorkerGuard> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("trail")
        .filename_suffix("log")
        .build(log_dir)
        .with_context(|| format!("Failed to open log directory {}", log_dir.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let stderr = verbose.then(|| fmt::layer().with_target(false).with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .with(stderr)
        .try_init()
        .ok();

    Ok(guard)
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env("TRAIL_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_creates_log_directory() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("logs");

        let guard = init_tracing(&log_dir, false).unwrap();
        tracing::info!("hello");
        drop(guard);

        assert!(log_dir.is_dir());
        // A second call keeps the first subscriber.
        assert!(init_tracing(&log_dir, true).is_ok());
    }
}
