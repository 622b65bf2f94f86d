use std::{backtrace::Backtrace, path::Path};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_DIR: &str = "logs";
const LOG_FILE: &str = "app.log";

/// Installs the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `log_level` (`DEBUG`, `INFO`,
/// `WARNING`, `ERROR`, `CRITICAL`) picks the verbosity. Output is mirrored to
/// `logs/app.log` when a `logs` directory exists in the working directory.
///
/// The returned guard flushes the file writer on drop and must outlive the
/// last event that should reach the file.
pub fn init_tracing(log_level: &str) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(log_level)));

    let (writer, guard) = match file_writer(Path::new(LOG_DIR)) {
        Some((writer, guard)) => (Some(writer), Some(guard)),
        None => (None, None),
    };
    let file_layer = writer.map(|writer| {
        fmt::layer()
            .with_ansi(false)
            .with_target(false)
            .with_writer(writer)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .with(file_layer)
        .init();
    set_panic_hook();
    guard
}

pub fn filter_directives(log_level: &str) -> String {
    let level = match log_level.trim().to_ascii_uppercase().as_str() {
        "TRACE" => "trace",
        "DEBUG" => "debug",
        "WARN" | "WARNING" => "warn",
        "ERROR" | "CRITICAL" | "FATAL" => "error",
        _ => "info",
    };
    format!("{level},tower_http=info")
}

/// Non-blocking appender for `dir/app.log`, or `None` when `dir` is missing.
fn file_writer(dir: &Path) -> Option<(NonBlocking, WorkerGuard)> {
    if !dir.is_dir() {
        return None;
    }
    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    Some(tracing_appender::non_blocking(appender))
}

fn set_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let message = if let Some(message) = info.payload().downcast_ref::<&str>() {
            *message
        } else if let Some(message) = info.payload().downcast_ref::<String>() {
            message.as_str()
        } else {
            "unknown panic"
        };

        let backtrace = Backtrace::capture();

        if let Some(location) = info.location() {
            tracing::error!(
                panic = %message,
                location = %location,
                backtrace = %backtrace,
                "panic"
            );
        } else {
            tracing::error!(panic = %message, backtrace = %backtrace, "panic");
        }
    }));
}
