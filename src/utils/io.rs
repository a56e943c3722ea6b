// src/utils/io.rs
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

pub const LOG_FILE_NAME: &str = "passgen.log";

/// Where the log file goes when `LOG_FILE` is not set.
///
/// Prefers the per-user data directory and falls back to the working
/// directory. The directory itself is created by `Config::ensure_directories_exist`.
pub fn default_log_file() -> PathBuf {
    let dirs = ProjectDirs::from("com", "rustpassgen", "passgen");
    log_file_in(dirs.as_ref().map(|d| d.data_local_dir()))
}

fn log_file_in(dir: Option<&Path>) -> PathBuf {
    match dir {
        Some(dir) => dir.join(LOG_FILE_NAME),
        None => {
            log::warn!("Could not determine data directory, logging to ./{}", LOG_FILE_NAME);
            PathBuf::from(".").join(LOG_FILE_NAME)
        }
    }
}
