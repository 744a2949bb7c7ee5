use crate::error::{Result, TreescopeError};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Overrides the directory that receives log files.
pub const LOG_DIR_ENV: &str = "TREESCOPE_LOG_DIR";

/// How a process should log: always to a daily file, optionally echoed to stderr.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Prefix of the rolling files, e.g. `cli.2026-10-19`.
    pub component: String,
    pub dir: PathBuf,
    pub verbose: bool,
}

impl LogConfig {
    pub fn from_env(component: &str, verbose: bool) -> Self {
        Self {
            component: component.to_string(),
            dir: resolve_log_dir(std::env::var_os(LOG_DIR_ENV), dirs::home_dir()),
            verbose,
        }
    }

    /// Filter used when `RUST_LOG` is unset. Verbose runs also see analyzer
    /// debug events such as opened scopes.
    fn default_filter(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}

/// `$TREESCOPE_LOG_DIR` when set and non-empty, otherwise `~/.treescope/logs`.
fn resolve_log_dir(overridden: Option<OsString>, home: Option<PathBuf>) -> PathBuf {
    match overridden {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => home
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".treescope")
            .join("logs"),
    }
}

pub fn init_logging(config: &LogConfig) -> Result<WorkerGuard> {
    std::fs::create_dir_all(&config.dir)?;

    let file_appender = tracing_appender::rolling::daily(&config.dir, &config.component);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_filter()));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);

    let installed = if config.verbose {
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false);
        registry.with(stderr_layer).try_init()
    } else {
        registry.try_init()
    };
    installed.map_err(|e| TreescopeError::Internal(format!("logging already initialized: {}", e)))?;

    Ok(guard)
}
