//! Logging
//!
//! The terminal belongs to the launcher UI, so logs go to a file.
//!
//! Filter priority: `MODALI_LOG` > `RUST_LOG` > `warn,modali=info`.
//!
//! Default location: `<data_local_dir>/modali/logs/modali-<pid>.log`,
//! overridden with `--log-file <path>` or `MODALI_LOG_FILE`. A path with an
//! extension names the file; anything else names the directory.

use std::env;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

const DEFAULT_FILTER: &str = "warn,modali=info";

#[derive(Debug, Error)]
pub enum LogError {
    #[error("Cannot create log directory {path}: {source}")]
    Directory {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    #[error("Logging already initialized: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Returned from [`init`]; hold it for the life of the program so the
/// background writer flushes on exit.
pub struct LogGuard {
    _file_guard: WorkerGuard,
    pub log_file: PathBuf,
}

pub fn init(log_file: Option<PathBuf>) -> Result<LogGuard, LogError> {
    let (log_dir, filename) = resolve_log_path(log_file);

    std::fs::create_dir_all(&log_dir).map_err(|source| LogError::Directory {
        path: log_dir.display().to_string(),
        source,
    })?;

    let file_appender = tracing_appender::rolling::never(&log_dir, &filename);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_filter(create_filter()?);

    Registry::default().with(file_layer).try_init()?;

    Ok(LogGuard {
        _file_guard: file_guard,
        log_file: log_dir.join(filename),
    })
}

fn create_filter() -> Result<EnvFilter, LogError> {
    let directives = env::var("MODALI_LOG")
        .or_else(|_| env::var("RUST_LOG"))
        .unwrap_or_else(|_| DEFAULT_FILTER.to_string());
    Ok(EnvFilter::try_new(directives)?)
}

fn resolve_log_path(override_path: Option<PathBuf>) -> (PathBuf, String) {
    let filename = format!("modali-{}.log", std::process::id());

    if let Some(path) = override_path {
        if path.extension().is_some() {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or(filename);
            return (dir.to_path_buf(), name);
        }
        return (path, filename);
    }

    let dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("modali")
        .join("logs");

    (dir, filename)
}
