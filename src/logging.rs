//! Tracing subscriber setup
//!
//! The TUI owns stdout, so interactive sessions log to a file under the
//! cache directory. CLI runs log to stderr.

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Primary filter variable; `RUST_LOG` is consulted when it is unset
pub const LOG_ENV: &str = "CINESCOPE_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Log file used in TUI mode
pub fn log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join("cinescope").join("cinescope.log"))
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Log to stderr
pub fn init_cli() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Log to the cache-dir file. Logging stays off if the file can't be opened.
pub fn init_tui() -> Option<PathBuf> {
    let path = log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    let file = File::options().create(true).append(true).open(&path).ok()?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Some(path)
}
