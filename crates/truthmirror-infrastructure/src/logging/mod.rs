//! Logging setup.
//!
//! - one-line JSON records in a daily rolling file (always)
//! - compact colored output on stdout (debug builds only)
//! - `log` crate records are bridged into `tracing`
//! - client-side log lines can be forwarded with [`log_from_client`]
//!
//! `RUST_LOG` overrides the default filters.

use log::LevelFilter;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_log::LogTracer;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer, Registry};

pub const LOG_FILE_PREFIX: &str = "truthmirror.log";

static LOG_DIR: OnceLock<PathBuf> = OnceLock::new();
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Install the global subscriber. Calling it again is a no-op.
pub fn init_logger(log_dir: &Path) -> anyhow::Result<()> {
    if LOG_DIR.get().is_some() {
        return Ok(());
    }

    std::fs::create_dir_all(log_dir)?;

    let _ = LogTracer::builder()
        .with_max_level(LevelFilter::Trace)
        .init();

    let file_appender = rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let json_layer = fmt::layer()
        .with_writer(non_blocking)
        .json()
        .flatten_event(true)
        .with_current_span(false)
        .with_span_list(false)
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_target(true)
        .with_timer(fmt::time::ChronoLocal::new(
            "%Y-%m-%dT%H:%M:%S%.3f%:z".to_string(),
        ))
        .with_filter(file_filter());

    let stdout_layer = if cfg!(debug_assertions) {
        Some(
            fmt::layer()
                .compact()
                .with_target(true)
                .with_ansi(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                ))
                .with_filter(stdout_filter()),
        )
    } else {
        None
    };

    let subscriber = Registry::default().with(json_layer).with(stdout_layer);
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    let _ = FILE_GUARD.set(guard);
    let _ = LOG_DIR.set(log_dir.to_path_buf());

    tracing::info!(
        target: "truthmirror::logging",
        log_dir = %log_dir.display(),
        version = env!("CARGO_PKG_VERSION"),
        profile = if cfg!(debug_assertions) { "debug" } else { "release" },
        "Logger initialized"
    );

    Ok(())
}

fn file_filter() -> EnvFilter {
    let default_level = if cfg!(debug_assertions) {
        "info,truthmirror=debug"
    } else {
        "warn,truthmirror=info"
    };
    filter_or(default_level)
}

fn stdout_filter() -> EnvFilter {
    filter_or("info,truthmirror=debug")
}

fn filter_or(default_directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Directory passed to the first successful [`init_logger`] call
pub fn log_dir() -> Option<PathBuf> {
    LOG_DIR.get().cloned()
}

/// Log line reported by the UI client
#[derive(Debug, serde::Deserialize)]
pub struct ClientLog {
    pub level: String,
    pub target: String,
    pub message: String,
    #[serde(default)]
    pub fields: Option<serde_json::Value>,
}

/// Re-emit a client log line under the `client` target at its own level.
/// Unknown levels are logged as info.
pub fn log_from_client(entry: &ClientLog) {
    let client_target = entry.target.as_str();
    let message = entry.message.as_str();
    let fields = entry.fields.as_ref();

    match entry.level.to_lowercase().as_str() {
        "error" => tracing::error!(target: "client", client_target, ?fields, "{}", message),
        "warn" => tracing::warn!(target: "client", client_target, ?fields, "{}", message),
        "debug" => tracing::debug!(target: "client", client_target, ?fields, "{}", message),
        "trace" => tracing::trace!(target: "client", client_target, ?fields, "{}", message),
        _ => tracing::info!(target: "client", client_target, ?fields, "{}", message),
    }
}
