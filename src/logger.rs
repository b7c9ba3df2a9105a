use chrono::{Local, Utc};
use std::sync::{Arc, Mutex};

use crate::config::LoggingConfig;

/// Shared activity log that can be used across the application
#[derive(Clone)]
pub struct Logger {
    entries: Arc<Mutex<Vec<String>>>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut entries) = self.entries.lock() {
            entries.push(formatted_message);
        }
    }

    /// Get all entries, newest first
    pub fn entries(&self) -> Vec<String> {
        if let Ok(entries) = self.entries.lock() {
            let mut sorted = entries.clone();
            sorted.reverse();
            sorted
        } else {
            Vec::new()
        }
    }

    /// Clear all entries
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Route `log` macro output to a file when logging is enabled.
///
/// The TUI owns the terminal, so file output is the only sink. A no-op when
/// logging is disabled in the configuration.
pub fn init_file_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    if !config.enabled {
        return Ok(());
    }

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(fern::log_file(&config.file)?)
        .apply()?;

    Ok(())
}
