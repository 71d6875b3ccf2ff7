//! Logging initialization using the `tracing` crate.
//!
//! The terminal belongs to the UI, so log lines go to
//! `<cache_dir>/wallview/wallview.log` instead of stderr.
//! Filtering follows `RUST_LOG` (default: `wallview=info`).

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Location of the log file, if a cache directory is known
pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join("wallview").join("wallview.log"))
}

/// Initializes the global tracing subscriber.
///
/// Call once, before the terminal enters raw mode. If the log file cannot be
/// opened, logging stays disabled.
pub fn init() {
    let Some(path) = log_path() else {
        return;
    };
    if let Some(dir) = path.parent() {
        if fs::create_dir_all(dir).is_err() {
            return;
        }
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wallview=info"));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init();

    if result.is_ok() {
        tracing::info!("starting wallview {}", env!("CARGO_PKG_VERSION"));
    }
}
