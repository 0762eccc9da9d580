// ABOUTME: Logging support for the beamert application
// ABOUTME: Provides a per-instance logger handle and the binary's env_logger setup

use log::{Level, LevelFilter};
use std::fmt::Display;
use std::io::Write;

/// A named logger with its own verbosity.
///
/// Messages go through the `log` facade with the handle's name as target.
/// The level check happens here, so two handles with different verbosity
/// can coexist in one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logger {
    name: String,
    level: LevelFilter,
}

impl Logger {
    pub fn new(name: impl Into<String>, level: LevelFilter) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }

    /// Debug when verbose, Info otherwise
    pub fn with_verbosity(name: impl Into<String>, verbose: bool) -> Self {
        let level = if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        Self::new(name, level)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    pub fn enabled(&self, level: Level) -> bool {
        level <= self.level
    }

    pub fn log(&self, level: Level, message: impl Display) {
        if self.enabled(level) {
            log::log!(target: self.name.as_str(), level, "{}", message);
        }
    }

    pub fn debug(&self, message: impl Display) {
        self.log(Level::Debug, message);
    }

    pub fn info(&self, message: impl Display) {
        self.log(Level::Info, message);
    }

    pub fn warn(&self, message: impl Display) {
        self.log(Level::Warn, message);
    }

    pub fn error(&self, message: impl Display) {
        self.log(Level::Error, message);
    }
}

/// Install the process-wide logger used by the binary.
///
/// Filtering is left to each `Logger` handle, so the global filter lets
/// everything through up to debug unless `RUST_LOG` says otherwise.
pub fn init() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<8} {:<15} {}",
                buf.timestamp(),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        let quiet = Logger::with_verbosity("Compiler", false);
        assert!(quiet.enabled(Level::Info));
        assert!(quiet.enabled(Level::Error));
        assert!(!quiet.enabled(Level::Debug));

        let verbose = Logger::with_verbosity("Compiler", true);
        assert!(verbose.enabled(Level::Debug));
        assert!(!verbose.enabled(Level::Trace));
    }

    #[test]
    fn test_handles_are_independent() {
        let a = Logger::with_verbosity("A", true);
        let b = Logger::with_verbosity("B", false);
        assert_eq!(a.level(), LevelFilter::Debug);
        assert_eq!(b.level(), LevelFilter::Info);
        assert_eq!(a.name(), "A");
    }
}
