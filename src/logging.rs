use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_PREFIX: &str = "bolaquent.log";

/// Keeps the non-blocking file writer flushing until dropped.
pub struct FileLogGuard {
    _guard: WorkerGuard,
}

#[derive(Debug, Clone)]
pub struct LoggingOptions {
    pub filter: String,
    pub file_dir: Option<PathBuf>,
}

impl LoggingOptions {
    pub fn from_env(filter: &str) -> Self {
        let file_dir = if file_logging_enabled() {
            Some(PathBuf::from(
                std::env::var("LOG_DIR").unwrap_or_else(|_| "./logs".to_string()),
            ))
        } else {
            None
        };

        Self {
            filter: filter.to_string(),
            file_dir,
        }
    }
}

pub fn file_logging_enabled() -> bool {
    std::env::var("ENABLE_FILE_LOGS")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false)
}

/// Installs the global subscriber: stdout always, plus a daily-rotated file when configured.
pub fn init_tracing(options: &LoggingOptions) -> Option<FileLogGuard> {
    let env_filter =
        EnvFilter::try_new(&options.filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let mut guard = None;
    let file_layer = options.file_dir.as_ref().and_then(|dir| {
        if let Err(err) = std::fs::create_dir_all(dir) {
            eprintln!("failed to create log directory {}: {err}", dir.display());
            return None;
        }
        let appender = RollingFileAppender::new(Rotation::DAILY, dir, LOG_FILE_PREFIX);
        let (writer, worker_guard) = tracing_appender::non_blocking(appender);
        guard = Some(FileLogGuard {
            _guard: worker_guard,
        });
        Some(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .with(file_layer)
        .init();

    guard
}
