use crate::config::collscope_home;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub const DEFAULT_DIRECTIVE: &str = "info";

/// `~/.collscope/logs`
pub fn log_dir() -> PathBuf {
    collscope_home().join("logs")
}

pub fn init_logging(component: &str, to_stderr: bool) -> WorkerGuard {
    init_logging_with(component, to_stderr, DEFAULT_DIRECTIVE)
}

/// Like [`init_logging`], with the filter used when `RUST_LOG` is unset.
///
/// The returned guard flushes the file log on drop; keep it alive for the
/// whole run.
pub fn init_logging_with(component: &str, to_stderr: bool, default_directive: &str) -> WorkerGuard {
    let log_dir = log_dir();
    let _ = std::fs::create_dir_all(&log_dir);

    // Daily files named after the component, e.g. cli.log.2024-01-21
    let file_appender = tracing_appender::rolling::daily(&log_dir, component);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);
    let stderr_layer = to_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false)
    });

    // A second initialization (tests, embedding hosts) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init();

    guard
}
