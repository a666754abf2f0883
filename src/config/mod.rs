//! # Configuration
//!
//! Settings for a play session and for logging, read from a TOML file.
//! The dungeon itself is hardcoded; only how the game runs is configurable.
//!
//! ## Configuration File Format
//!
//! ```toml
//! [game]
//! seed = 42          # optional: replay the same dice rolls
//! show_intro = true
//!
//! [logging]
//! level = "warn"
//! file = "lost-artifact.log"   # optional
//! ```
//!
//! A missing file is not an error: [`Config::load_or_default`] falls back to
//! [`Config::default`]. CLI flags take precedence over the file.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    /// Fixed RNG seed; `None` draws fresh entropy each run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Print the title card before the first room.
    #[serde(default = "default_show_intro")]
    pub show_intro: bool,
}

fn default_show_intro() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            show_intro: default_show_intro(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parsed level filter; unrecognized names fall back to `warn`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Warn)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        Ok(config)
    }

    /// Load `path` if it exists, otherwise use defaults. A file that exists
    /// but cannot be parsed is still an error.
    pub fn load_or_default(path: &str) -> Result<Self> {
        if Path::new(path).exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Create a default configuration file
    pub fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: Config = toml::from_str("[game]\nseed = 7\n").unwrap();
        assert_eq!(config.game.seed, Some(7));
        assert!(config.game.show_intro);
        assert_eq!(config.logging.level, "warn");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn level_filter_falls_back_to_warn() {
        let mut logging = LoggingConfig::default();
        logging.level = "debug".into();
        assert_eq!(logging.level_filter(), log::LevelFilter::Debug);
        logging.level = "chatty".into();
        assert_eq!(logging.level_filter(), log::LevelFilter::Warn);
    }

    #[test]
    fn missing_file_uses_defaults() {
        let td = tempfile::tempdir().unwrap();
        let path = td.path().join("absent.toml");
        let config = Config::load_or_default(path.to_str().unwrap()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn default_file_loads_back() {
        let td = tempfile::tempdir().unwrap();
        let path = td.path().join("lost-artifact.toml");
        let path = path.to_str().unwrap();
        Config::create_default(path).unwrap();
        assert_eq!(Config::load(path).unwrap(), Config::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let td = tempfile::tempdir().unwrap();
        let path = td.path().join("bad.toml");
        std::fs::write(&path, "[game\nseed = ").unwrap();
        let err = Config::load_or_default(path.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
