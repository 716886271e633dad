//! Configuration management for the CLI
//!
//! This module handles loading configuration from:
//! - Default values
//! - Configuration files (YAML/JSON)
//! - Environment variables (see [`crate::logging`])
//! - Command-line arguments

use crate::cli::OutputFormat;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,

    /// Path settings
    pub paths: PathConfig,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format when `--output` is not given
    pub format: OutputFormat,

    /// Use colored output by default
    pub color: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level used when no `-v` flag is given (trace, debug, info, warn, error)
    pub level: Option<String>,

    /// Log format (compact, full, json)
    pub format: Option<String>,

    /// Log file path
    pub file: Option<PathBuf>,

    /// Include thread IDs
    pub thread_ids: bool,
}

/// Path configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// Directory relative log file names are resolved against
    pub log_dir: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Human,
            color: true,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::config(format!(
                "configuration file {} does not exist",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;

        let config = if is_yaml(path) {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };

        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        for path in &Self::default_config_paths() {
            if path.exists() {
                match Self::from_file(path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            Self::from_file(path)
        } else {
            Self::load()
        }
    }

    /// Get default configuration file paths to check
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(".steerlog.yaml"),
            PathBuf::from(".steerlog.json"),
            PathBuf::from("steerlog.yaml"),
            PathBuf::from("steerlog.json"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            let steerlog_dir = config_dir.join("steerlog");
            paths.push(steerlog_dir.join("config.yaml"));
            paths.push(steerlog_dir.join("config.json"));
        }

        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".steerlog.yaml"));
            paths.push(home_dir.join(".steerlog.json"));
        }

        paths
    }

    /// Directory log files are created in and read from
    pub fn log_root(&self) -> PathBuf {
        self.paths
            .log_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Resolve a log file argument against the configured log directory
    pub fn resolve_log_path(&self, file: &Path) -> PathBuf {
        self.log_root().join(file)
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|s| s.to_str()),
        Some("yaml") | Some("yml")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.output.format, OutputFormat::Human);
        assert!(config.output.color);
        assert_eq!(config.log_root(), PathBuf::from("."));
        assert_eq!(
            config.resolve_log_path(Path::new("run.log")),
            PathBuf::from("./run.log")
        );
    }

    #[test]
    fn test_yaml_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("steerlog.yaml");
        std::fs::write(
            &path,
            "output:\n  format: json-pretty\n  color: false\nlogging:\n  level: debug\npaths:\n  log_dir: /var/log/sim\n",
        )
        .unwrap();

        let config = Config::load_with_file(Some(&path)).unwrap();
        assert_eq!(config.output.format, OutputFormat::JsonPretty);
        assert!(!config.output.color);
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert_eq!(
            config.resolve_log_path(Path::new("run.log")),
            PathBuf::from("/var/log/sim/run.log")
        );
        // Absolute arguments ignore the log directory
        assert_eq!(
            config.resolve_log_path(Path::new("/tmp/other.log")),
            PathBuf::from("/tmp/other.log")
        );
    }

    #[test]
    fn test_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.paths.log_dir = Some(dir.path().to_path_buf());
        config.logging.thread_ids = true;
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.paths.log_dir, config.paths.log_dir);
        assert!(loaded.logging.thread_ids);
    }

    #[test]
    fn test_missing_and_malformed_files() {
        let dir = TempDir::new().unwrap();
        let missing = Config::from_file(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(missing, Error::Config(_)));

        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(Config::from_file(&path), Err(Error::Json(_))));
    }
}
