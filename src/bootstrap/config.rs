//=========================================================================
// Configuration
//=========================================================================
//
// TOML configuration file, created with defaults on first run.
//
// Layout:
// ```toml
// [logging]
// logging_level = "INFO"      # DEBUG | INFO | WARNING | ERROR | CRITICAL
// trace_calls = true
//
// [display]
// title = "State Loop"
// width = 800
// height = 600
// borderless = false
//
// [timing]
// fps = 80
// ```
//
// Missing sections or keys fall back to their defaults.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fs;
use std::io;
use std::num::NonZeroU32;
use std::path::Path;

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::clock::DEFAULT_FPS;

//=== ConfigError =========================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to write default config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid config value: {0}")]
    Invalid(&'static str),
}

//=== LogLevel ============================================================

/// Log level as written in the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    /// Maps to the `error` filter; `log` has no level above it.
    Critical,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warning => LevelFilter::Warn,
            LogLevel::Error | LogLevel::Critical => LevelFilter::Error,
        }
    }
}

//=== Sections ============================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub logging_level: LogLevel,

    /// Log every state call (at debug level).
    pub trace_calls: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            logging_level: LogLevel::Info,
            trace_calls: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Window caption.
    pub title: String,
    pub width: u32,
    pub height: u32,

    /// Open the window without decorations.
    pub borderless: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: String::from("State Loop"),
            width: 800,
            height: 600,
            borderless: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Frame-rate cap. Zero fails to parse.
    pub fps: NonZeroU32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self { fps: DEFAULT_FPS }
    }
}

//=== Config ==============================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub display: DisplayConfig,
    pub timing: TimingConfig,
}

impl Config {
    /// Reads the config at `path`, or writes the defaults there if the
    /// file does not exist yet.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let text = fs::read_to_string(path)?;
            let config: Self = toml::from_str(&text)?;
            config.validate()?;
            return Ok(config);
        }

        let config = Self::default();
        fs::write(path, toml::to_string_pretty(&config)?)?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.display.width == 0 || self.display.height == 0 {
            return Err(ConfigError::Invalid("display size must be non-zero"));
        }
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("game.toml");

        let config = Config::load_or_create(&path).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.logging.logging_level, LogLevel::Info);
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("[logging]"));
        assert!(written.contains("logging_level = \"INFO\""));
    }

    #[test]
    fn created_file_reads_back_identically() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("game.toml");

        let created = Config::load_or_create(&path).unwrap();
        let loaded = Config::load_or_create(&path).unwrap();

        assert_eq!(created, loaded);
    }

    #[test]
    fn partial_file_uses_defaults_for_the_rest() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("game.toml");
        fs::write(&path, "[logging]\nlogging_level = \"DEBUG\"\n").unwrap();

        let config = Config::load_or_create(&path).unwrap();

        assert_eq!(config.logging.logging_level, LogLevel::Debug);
        assert!(config.logging.trace_calls);
        assert_eq!(config.display, DisplayConfig::default());
        assert_eq!(config.timing.fps.get(), 80);
    }

    #[test]
    fn unknown_level_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("game.toml");
        fs::write(&path, "[logging]\nlogging_level = \"LOUD\"\n").unwrap();

        assert!(matches!(
            Config::load_or_create(&path),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn zero_fps_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("game.toml");
        fs::write(&path, "[timing]\nfps = 0\n").unwrap();

        assert!(matches!(
            Config::load_or_create(&path),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn level_mapping() {
        assert_eq!(LevelFilter::from(LogLevel::Debug), LevelFilter::Debug);
        assert_eq!(LevelFilter::from(LogLevel::Info), LevelFilter::Info);
        assert_eq!(LevelFilter::from(LogLevel::Warning), LevelFilter::Warn);
        assert_eq!(LevelFilter::from(LogLevel::Error), LevelFilter::Error);
        assert_eq!(LevelFilter::from(LogLevel::Critical), LevelFilter::Error);
    }

    #[test]
    fn display_and_timing_sections_parse() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("game.toml");
        fs::write(
            &path,
            "[display]\ntitle = \"Demo\"\nwidth = 320\nheight = 240\nborderless = true\n\n[timing]\nfps = 30\n",
        )
        .unwrap();

        let config = Config::load_or_create(&path).unwrap();

        assert_eq!(config.display.title, "Demo");
        assert_eq!((config.display.width, config.display.height), (320, 240));
        assert!(config.display.borderless);
        assert_eq!(config.timing.fps.get(), 30);
        assert_eq!(config.logging, LoggingConfig::default());
    }
}
