//=========================================================================
// Logging
//=========================================================================
//
// Installs the process-wide `log` backend: a `simplelog::WriteLogger`
// writing to a file that is truncated on every start.
//
// Each line carries an RFC 3339 timestamp, the level, and the message.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fs::File;
use std::io;
use std::path::Path;

use log::{LevelFilter, SetLoggerError};
use simplelog::{ConfigBuilder, WriteLogger};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use super::config::LogLevel;

//=== LoggingError ========================================================

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to create log file: {0}")]
    Io(#[from] io::Error),

    #[error("a logger is already installed: {0}")]
    Install(#[from] SetLoggerError),
}

//=== init_logging ========================================================

/// Installs the file logger. Can succeed only once per process.
pub fn init_logging(path: &Path, level: LogLevel) -> Result<(), LoggingError> {
    let file = File::create(path)?;
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();

    WriteLogger::init(level.into(), config, file)?;
    Ok(())
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    // Only one logger per process, so everything that installs one lives
    // in this single test.
    #[test]
    fn installs_once_and_truncates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("game.log");
        fs::write(&path, "stale contents from the last run\n").unwrap();

        init_logging(&path, LogLevel::Info).unwrap();
        log::info!("first line");
        log::debug!("filtered out");
        log::logger().flush();

        let text = fs::read_to_string(&path).unwrap();
        assert!(!text.contains("stale contents"));
        let line = text.lines().find(|l| l.contains("first line")).unwrap();
        assert!(line.contains("INFO"), "line was {:?}", line);
        assert!(!text.contains("filtered out"));

        let again = dir.path().join("second.log");
        assert!(matches!(
            init_logging(&again, LogLevel::Debug),
            Err(LoggingError::Install(_))
        ));
    }

    #[test]
    fn unwritable_path_is_an_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("game.log");

        assert!(matches!(
            init_logging(&path, LogLevel::Info),
            Err(LoggingError::Io(_))
        ));
    }
}
