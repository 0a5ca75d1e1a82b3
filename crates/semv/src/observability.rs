//! Observability setup: structured logging.
//!
//! **Important**: This module never writes to stdout, which is reserved
//! for classification output. All logging goes to a JSONL file or stderr.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const ENV_LOG_PATH: &str = "SEMV_LOG_PATH";
const ENV_LOG_DIR: &str = "SEMV_LOG_DIR";
const LOG_FILE_NAME: &str = "semv.jsonl";

/// Guard that must be held for the lifetime of the application so the
/// non-blocking log worker flushes on shutdown.
pub struct ObservabilityGuard {
    _log_guard: WorkerGuard,
}

/// Initialize logging.
///
/// Log lines go to a daily-rolling JSONL file; when no writable location
/// can be found, they fall back to stderr.
pub fn init(config_log_dir: Option<PathBuf>, env_filter: EnvFilter) -> ObservabilityGuard {
    let (writer, guard) = match resolve_log_target(config_log_dir) {
        Ok(target) => {
            let appender = tracing_appender::rolling::daily(&target.dir, &target.file_name);
            tracing_appender::non_blocking(appender)
        }
        Err(err) => {
            // Fall back to stderr, NOT stdout.
            eprintln!("Warning: {err}. Falling back to stderr logging.");
            tracing_appender::non_blocking(std::io::stderr())
        }
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().json().with_writer(writer))
        .init();

    tracing::debug!("observability initialized");

    ObservabilityGuard { _log_guard: guard }
}

/// Build an `EnvFilter` based on CLI flags and environment.
///
/// Priority: quiet flag > verbose flag > RUST_LOG env > default_level
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if quiet {
        return EnvFilter::new("error");
    }

    if verbose > 0 {
        let level = match verbose {
            1 => "debug",
            _ => "trace",
        };
        return EnvFilter::new(level);
    }

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

#[derive(Clone, Debug)]
struct LogTarget {
    dir: PathBuf,
    file_name: String,
}

fn resolve_log_target(config_log_dir: Option<PathBuf>) -> Result<LogTarget, String> {
    if let Some(path) = std::env::var_os(ENV_LOG_PATH).map(PathBuf::from) {
        return log_target_from_path(path);
    }

    if let Some(dir) = std::env::var_os(ENV_LOG_DIR).map(PathBuf::from) {
        return log_target_from_dir(dir);
    }

    if let Some(dir) = config_log_dir {
        return log_target_from_dir(dir);
    }

    // XDG-compliant data directory, then the working directory.
    let mut candidates = Vec::new();
    if let Some(proj_dirs) = directories::ProjectDirs::from("", "", env!("CARGO_PKG_NAME")) {
        candidates.push(proj_dirs.data_local_dir().join("logs"));
    }
    if let Ok(dir) = std::env::current_dir() {
        candidates.push(dir);
    }

    for dir in candidates {
        if ensure_writable(&dir, LOG_FILE_NAME).is_ok() {
            return Ok(LogTarget {
                dir,
                file_name: LOG_FILE_NAME.to_string(),
            });
        }
    }

    Err("No writable log directory found".to_string())
}

fn log_target_from_dir(dir: PathBuf) -> Result<LogTarget, String> {
    ensure_writable(&dir, LOG_FILE_NAME)?;
    Ok(LogTarget {
        dir,
        file_name: LOG_FILE_NAME.to_string(),
    })
}

fn log_target_from_path(path: PathBuf) -> Result<LogTarget, String> {
    let file_name = path
        .file_name()
        .ok_or_else(|| format!("{ENV_LOG_PATH} must include a file name"))
        .and_then(|name| {
            name.to_str()
                .map(ToString::to_string)
                .ok_or_else(|| format!("{ENV_LOG_PATH} must be valid UTF-8"))
        })?;

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    ensure_writable(dir, &file_name)?;

    Ok(LogTarget {
        dir: dir.to_path_buf(),
        file_name,
    })
}

fn ensure_writable(dir: &Path, file_name: &str) -> Result<(), String> {
    std::fs::create_dir_all(dir)
        .map_err(|e| format!("Failed to create log directory {}: {e}", dir.display()))?;

    let path = dir.join(file_name);
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| format!("Failed to open log file {}: {e}", path.display()))?;

    Ok(())
}
