//! Console logging
//!
//! Routes the `log` facade to stdout with the level as a prefix.

use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Global logger instance
pub static LOGGER: Logger = Logger::new();

/// Stdout logger
pub struct Logger {
    inner: Mutex<()>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Creates a new logger instance
    pub const fn new() -> Logger {
        Logger {
            inner: Mutex::new(()),
        }
    }
}

/// Message prefix for a level
pub fn prefix(level: Level) -> &'static str {
    match level {
        Level::Error => "Error",
        Level::Warn => "Warning",
        Level::Info => "Info",
        Level::Debug => "Debug",
        Level::Trace => "Trace",
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    /// Formats messages as "Level: message"
    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
            println!("{}: {}", prefix(record.level()), record.args());
        }
    }

    fn flush(&self) {}
}

/// Installs the logger
///
/// Debug builds log at `Debug`, release builds at `Info`. Calling this more
/// than once is harmless.
pub fn init() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(
            #[cfg(debug_assertions)]
            LevelFilter::Debug,
            #[cfg(not(debug_assertions))]
            LevelFilter::Info,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes() {
        assert_eq!(prefix(Level::Warn), "Warning");
        assert_eq!(prefix(Level::Error), "Error");
        assert_eq!(prefix(Level::Info), "Info");
    }

    #[test]
    fn test_init_twice() {
        init();
        init();
        assert!(log::max_level() >= LevelFilter::Info);
    }
}
