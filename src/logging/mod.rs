// src/logging/mod.rs
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;

use crate::core::Config;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("Logger already initialised: {0}")]
    InitError(String),
}

pub type Result<T> = std::result::Result<T, LoggingError>;

const MAX_LOG_SIZE: u64 = 10 * 1024 * 1024; // 10 MB
const MAX_LOG_FILES: usize = 5;

/// Rotates the log file if needed and installs `env_logger` writing into it.
pub fn init(config: &Config) -> Result<()> {
    config.ensure_directories_exist();
    rotate_if_needed(&config.log_file, MAX_LOG_SIZE, MAX_LOG_FILES)?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)?;

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(|e| LoggingError::InitError(e.to_string()))
}

// Check if log rotation is needed
pub fn rotate_if_needed(log_file: &Path, max_size: u64, max_files: usize) -> Result<Option<PathBuf>> {
    let metadata = match fs::metadata(log_file) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    if metadata.len() <= max_size {
        return Ok(None);
    }

    let rotated = rotate_log(log_file)?;
    cleanup_old_logs(log_file, max_files)?;
    Ok(Some(rotated))
}

// Rotate log files
fn rotate_log(log_file: &Path) -> Result<PathBuf> {
    let timestamp = Utc::now().format("%Y%m%d%H%M%S%3f");
    let stem = log_file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "passgen".to_string());

    let rotated = log_file.with_file_name(format!("{}-{}.log", stem, timestamp));
    fs::rename(log_file, &rotated)?;

    Ok(rotated)
}

// Clean up old log files, keeping only the most recent ones
fn cleanup_old_logs(log_file: &Path, max_files: usize) -> Result<()> {
    let dir = match log_file.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let stem = log_file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let prefix = format!("{}-", stem);

    let mut rotated: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(&dir)? {
        let path = entry?.path();
        let is_rotated = path.is_file()
            && path.extension().map_or(false, |ext| ext == "log")
            && path
                .file_name()
                .map_or(false, |name| name.to_string_lossy().starts_with(&prefix));
        if is_rotated {
            rotated.push(path);
        }
    }

    // Timestamped names sort chronologically; newest first
    rotated.sort();
    rotated.reverse();

    for old in rotated.iter().skip(max_files) {
        log::debug!("Removing old log file {}", old.display());
        fs::remove_file(old)?;
    }

    Ok(())
}
