//! Application logging.
//!
//! [`Logger`] keeps a short in-memory history of what the UI did and forwards
//! every entry to the `log` facade. When file logging is enabled a fern
//! dispatch writes those records to the cache directory, so nothing reaches
//! stdout while the terminal is in raw mode.

use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use chrono::Local;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Maximum number of entries kept in memory
const MAX_LOG_ENTRIES: usize = 500;

/// Shared logger that can be used across the application
#[derive(Clone, Default)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    log_file: Option<PathBuf>,
}

impl Logger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a logger, installing the file backend when `enabled`
    pub fn from_config(enabled: bool) -> Result<Self> {
        if !enabled {
            return Ok(Self::new());
        }

        let path = Self::get_log_file_path()?;
        Self::with_log_file(path)
    }

    /// Create a logger writing to a specific file
    pub fn with_log_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }

        install_file_dispatch(&path)?;

        Ok(Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            log_file: Some(path),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.log_file.is_some()
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        log::info!("{}", message);

        let timestamp = Local::now().format("%H:%M:%S%.3f");
        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() >= MAX_LOG_ENTRIES {
                logs.remove(0);
            }
            logs.push(format!("[{}] {}", timestamp, message));
        }
    }

    /// Get all logs (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    /// Default log file location: `<cache dir>/todolist/todolist.log`
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine cache directory"))
            .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
    }
}

fn install_file_dispatch(path: &Path) -> Result<()> {
    let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(file);

    // A global logger can only be installed once per process
    if dispatch.apply().is_err() {
        log::debug!("Logger already installed, keeping existing dispatch");
    }

    Ok(())
}
