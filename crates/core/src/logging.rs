use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Log to `~/.deptree/logs/<component>.<date>`, optionally mirrored to stderr.
pub fn init_logging(component: &str, to_stderr: bool) -> WorkerGuard {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    init_logging_in(&Path::new(&home).join(".deptree/logs"), component, to_stderr)
}

/// Same as [`init_logging`] with an explicit log directory.
///
/// The returned guard flushes the file writer on drop. If a global subscriber
/// is already installed it stays in place and receives a debug event saying so.
pub fn init_logging_in(log_dir: &Path, component: &str, to_stderr: bool) -> WorkerGuard {
    if let Err(e) = std::fs::create_dir_all(log_dir) {
        eprintln!("cannot create log directory {}: {}", log_dir.display(), e);
    }

    // Roll daily, with the component name as the prefix
    // This will create files like cli.log.2024-01-21
    let file_appender = tracing_appender::rolling::daily(log_dir, component);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);

    // stdout carries rendered trees, so the console layer goes to stderr
    let installed = if to_stderr {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false);
        registry.with(stderr_layer).try_init()
    } else {
        registry.try_init()
    };
    if let Err(e) = installed {
        tracing::debug!("Keeping the existing global subscriber: {}", e);
    }

    guard
}
