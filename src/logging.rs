//! Log file setup
//!
//! The terminal UI owns stdout, so logs go to a file: either the path given on
//! the command line or `skyglance.log` in the platform's local data directory.
//! `RUST_LOG` overrides the default `info` filter.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use directories::ProjectDirs;
use tracing_subscriber::EnvFilter;

/// File name used inside the data directory
pub const LOG_FILE_NAME: &str = "skyglance.log";

const DEFAULT_FILTER: &str = "info";

/// Default log location (`~/.local/share/skyglance/skyglance.log` on Linux)
///
/// Returns `None` if no home directory can be determined.
pub fn default_log_path() -> Option<PathBuf> {
    let project_dirs = ProjectDirs::from("", "", "skyglance")?;
    Some(project_dirs.data_local_dir().join(LOG_FILE_NAME))
}

/// Opens `path` for appending, creating parent directories as needed
pub fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Installs the global subscriber writing to a log file
///
/// # Arguments
/// * `explicit` - Path from `--log-file`, if given
///
/// # Returns
/// * `Some(path)` - The file logs are written to
/// * `None` - Logging is disabled (no usable path, or a subscriber is already set)
pub fn init(explicit: Option<&Path>) -> Option<PathBuf> {
    let path = explicit.map(Path::to_path_buf).or_else(default_log_path)?;
    let file = open_log_file(&path).ok()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .ok()?;

    tracing::info!(path = %path.display(), "logging started");
    Some(path)
}
